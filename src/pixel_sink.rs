//! Pixel output seam.
//!
//! The rasterizers never own a buffer; they write `(x, y, color)` triples
//! into whatever implements [`PixelSink`]. A `Vec<Pixel>` collects them,
//! [`FnSink`] forwards them to a closure, and
//! [`RenderingBuffer`](crate::rendering_buffer::RenderingBuffer) stores them.

use crate::color::Rgb;

// ============================================================================
// PixelSink
// ============================================================================

/// Destination for rasterized pixels.
///
/// Colors passed to `put_pixel` are already clamped to `[0, 1]`.
pub trait PixelSink {
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        (**self).put_pixel(x, y, color);
    }
}

// ============================================================================
// Pixel
// ============================================================================

/// One emitted pixel write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl Pixel {
    pub fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self { x, y, color }
    }

    /// Position only.
    pub fn xy(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl PixelSink for Vec<Pixel> {
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        self.push(Pixel::new(x, y, color));
    }
}

// ============================================================================
// FnSink
// ============================================================================

/// Adapts a `FnMut(x, y, color)` callback into a [`PixelSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(i32, i32, Rgb)> PixelSink for FnSink<F> {
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        (self.0)(x, y, color);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_two<S: PixelSink>(mut sink: S) {
        sink.put_pixel(1, 2, Rgb::RED);
        sink.put_pixel(3, 4, Rgb::BLUE);
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut pixels = Vec::new();
        plot_two(&mut pixels);
        assert_eq!(
            pixels,
            vec![Pixel::new(1, 2, Rgb::RED), Pixel::new(3, 4, Rgb::BLUE)]
        );
        assert_eq!(pixels[1].xy(), (3, 4));
    }

    #[test]
    fn test_fn_sink() {
        let mut count = 0;
        let mut last = None;
        plot_two(FnSink(|x, y, c| {
            count += 1;
            last = Some((x, y, c));
        }));
        assert_eq!(count, 2);
        assert_eq!(last, Some((3, 4, Rgb::BLUE)));
    }
}
