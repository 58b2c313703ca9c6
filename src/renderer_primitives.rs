//! Basic shape primitives renderer.
//!
//! Composes the Bresenham line and Gouraud triangle rasterizers into the
//! shapes the demo scenes draw: polylines, triangle outlines, filled
//! gradient triangles and sampled splines. No anti-aliasing.

use crate::basics::{Point3, PointI};
use crate::bresenham_line::draw_line;
use crate::color::Rgb;
use crate::curves::CubicBezier;
use crate::pixel_sink::PixelSink;
use crate::span_gouraud::{fill_gradient_triangle, ColoredVertex};
use crate::spline::Spline;

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Basic shape primitives renderer.
///
/// Draws aliased lines and gradient triangles into a borrowed
/// [`PixelSink`]. Keeps a line color and a current position for
/// `move_to` / `line_to`.
pub struct RendererPrimitives<'a, S: PixelSink + ?Sized> {
    sink: &'a mut S,
    line_color: Rgb,
    curr_x: i32,
    curr_y: i32,
}

impl<'a, S: PixelSink + ?Sized> RendererPrimitives<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            line_color: Rgb::BLACK,
            curr_x: 0,
            curr_y: 0,
        }
    }

    pub fn set_line_color(&mut self, c: Rgb) {
        self.line_color = c;
    }

    pub fn line_color(&self) -> Rgb {
        self.line_color
    }

    /// Draw a line from (x1,y1) to (x2,y2), both endpoints included.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        draw_line(x1, y1, x2, y2, self.line_color, &mut *self.sink);
    }

    /// Set the current position for line_to.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.curr_x = x;
        self.curr_y = y;
    }

    /// Draw a line from the current position to (x, y).
    pub fn line_to(&mut self, x: i32, y: i32) {
        self.line(self.curr_x, self.curr_y, x, y);
        self.curr_x = x;
        self.curr_y = y;
    }

    pub fn current(&self) -> PointI {
        PointI::new(self.curr_x, self.curr_y)
    }

    /// Connect consecutive points. Fewer than two points draws nothing.
    pub fn polyline(&mut self, points: &[PointI]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
    }

    /// [`polyline`](Self::polyline) through points rounded to the nearest
    /// pixel. z is ignored.
    pub fn polyline_f(&mut self, points: &[Point3]) {
        let pixels: Vec<PointI> = points.iter().map(|p| p.to_pixel()).collect();
        self.polyline(&pixels);
    }

    /// Outline of the triangle a-b-c.
    pub fn triangle(&mut self, a: PointI, b: PointI, c: PointI) {
        self.polyline(&[a, b, c, a]);
    }

    /// Fill a triangle with colors interpolated from its vertices.
    pub fn gradient_triangle(&mut self, v1: ColoredVertex, v2: ColoredVertex, v3: ColoredVertex) {
        fill_gradient_triangle(v1, v2, v3, &mut *self.sink);
    }

    /// Gradient fill, then the outline in the line color.
    pub fn outlined_gradient_triangle(
        &mut self,
        v1: ColoredVertex,
        v2: ColoredVertex,
        v3: ColoredVertex,
    ) {
        self.gradient_triangle(v1, v2, v3);
        self.triangle(
            PointI::new(v1.x, v1.y),
            PointI::new(v2.x, v2.y),
            PointI::new(v3.x, v3.y),
        );
    }

    /// A single Bézier segment as a polyline of `count + 1` samples.
    pub fn curve(&mut self, curve: &CubicBezier, count: u32) {
        let samples = curve.sample(count);
        self.polyline_f(&samples);
    }

    /// A whole spline, `samples_per_segment + 1` samples per segment.
    pub fn spline(&mut self, spline: &Spline, samples_per_segment: u32) {
        let samples = spline.sample(samples_per_segment);
        log::trace!(
            "spline: {} segments, {} samples",
            spline.segment_count(),
            samples.len()
        );
        self.polyline_f(&samples);
    }

    /// The spline's control polygon.
    pub fn control_polygon(&mut self, spline: &Spline) {
        self.polyline_f(spline.points());
    }

    pub fn sink(&self) -> &S {
        &*self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut *self.sink
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bresenham_line::line_pixels;
    use crate::color::Rgb8;
    use crate::pixel_sink::Pixel;
    use crate::rendering_buffer::RenderingBuffer;
    use std::collections::BTreeSet;

    fn xy_set(pixels: &[Pixel]) -> BTreeSet<(i32, i32)> {
        pixels.iter().map(|p| p.xy()).collect()
    }

    #[test]
    fn test_line_uses_line_color() {
        let mut pixels: Vec<Pixel> = Vec::new();
        let mut prim = RendererPrimitives::new(&mut pixels);
        prim.set_line_color(Rgb::RED);
        prim.line(0, 0, 4, 2);
        assert_eq!(prim.line_color(), Rgb::RED);
        assert_eq!(pixels, line_pixels(0, 0, 4, 2, Rgb::RED));
    }

    #[test]
    fn test_move_to_line_to() {
        let mut pixels: Vec<Pixel> = Vec::new();
        let mut prim = RendererPrimitives::new(&mut pixels);
        prim.move_to(1, 1);
        prim.line_to(5, 1);
        prim.line_to(5, 4);
        assert_eq!(prim.current(), PointI::new(5, 4));
        // 5 + 4 pixels, the corner written twice.
        assert_eq!(pixels.len(), 9);
        assert_eq!(xy_set(&pixels).len(), 8);
    }

    #[test]
    fn test_polyline_short_inputs() {
        let mut pixels: Vec<Pixel> = Vec::new();
        let mut prim = RendererPrimitives::new(&mut pixels);
        prim.polyline(&[]);
        prim.polyline(&[PointI::new(3, 3)]);
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_triangle_outline_closed() {
        let mut pixels: Vec<Pixel> = Vec::new();
        let mut prim = RendererPrimitives::new(&mut pixels);
        let (a, b, c) = (PointI::new(0, 0), PointI::new(6, 0), PointI::new(0, 6));
        prim.triangle(a, b, c);
        assert_eq!(prim.current(), a);

        let set = xy_set(&pixels);
        for p in [a, b, c] {
            assert!(set.contains(&(p.x, p.y)));
        }
        // Hypotenuse pixels are all present.
        for i in 0..=6 {
            assert!(set.contains(&(i, 6 - i)), "({i}, {})", 6 - i);
        }
    }

    #[test]
    fn test_outlined_gradient_triangle_into_buffer() {
        let mut buf = RenderingBuffer::new(16, 16, Rgb8::new(255, 255, 255));
        let mut prim = RendererPrimitives::new(&mut buf);
        prim.outlined_gradient_triangle(
            ColoredVertex::new(2, 2, Rgb::RED),
            ColoredVertex::new(12, 2, Rgb::GREEN),
            ColoredVertex::new(7, 12, Rgb::BLUE),
        );
        let black = Rgb8::new(0, 0, 0);
        // Outline drawn over the fill.
        assert_eq!(buf.pixel(2, 2), Some(black));
        assert_eq!(buf.pixel(7, 12), Some(black));
        // Interior filled with a blend.
        let inside = buf.pixel(7, 5).unwrap_or(black);
        assert_ne!(inside, black);
        assert_ne!(inside, Rgb8::new(255, 255, 255));
        // Outside untouched.
        assert_eq!(buf.pixel(0, 15), Some(Rgb8::new(255, 255, 255)));
    }

    #[test]
    fn test_spline_and_control_polygon() {
        let points = vec![
            Point3::new_2d(0.0, 0.0),
            Point3::new_2d(0.0, 10.0),
            Point3::new_2d(10.0, 10.0),
            Point3::new_2d(10.0, 0.0),
        ];
        let spline = Spline::new(points).unwrap();

        let mut curve_pixels: Vec<Pixel> = Vec::new();
        RendererPrimitives::new(&mut curve_pixels).spline(&spline, 8);
        let set = xy_set(&curve_pixels);
        assert!(set.contains(&(0, 0)));
        assert!(set.contains(&(10, 0)));
        // Peak of the arch at t = 0.5 is (5, 7.5).
        assert!(set.contains(&(5, 8)));

        let mut poly_pixels: Vec<Pixel> = Vec::new();
        RendererPrimitives::new(&mut poly_pixels).control_polygon(&spline);
        let set = xy_set(&poly_pixels);
        assert!(set.contains(&(0, 10)) && set.contains(&(10, 10)));
    }

    #[test]
    fn test_curve_matches_spline_of_one_segment() {
        let p = [
            Point3::new_2d(1.0, 2.0),
            Point3::new_2d(4.0, 9.0),
            Point3::new_2d(9.0, -3.0),
            Point3::new_2d(12.0, 5.0),
        ];
        let mut a: Vec<Pixel> = Vec::new();
        RendererPrimitives::new(&mut a).curve(&CubicBezier::from(p), 10);
        let mut b: Vec<Pixel> = Vec::new();
        RendererPrimitives::new(&mut b).spline(&Spline::from_slice(&p).unwrap(), 10);
        assert_eq!(a, b);
    }
}
