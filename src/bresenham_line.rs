//! Bresenham line rasterization.
//!
//! The classic integer-doubling form is replaced by a floating error
//! accumulator: every step along the primary axis adds the slope to
//! `error`, and once the accumulated error passes half a pixel in the
//! direction of travel the secondary coordinate moves by one and the error
//! is pulled back by `1.0`. All eight octants are handled by normalizing the
//! endpoints so that iteration always runs toward increasing primary
//! coordinate.

use crate::basics::PointI;
use crate::color::Rgb;
use crate::pixel_sink::{Pixel, PixelSink};

// ============================================================================
// LinePixels
// ============================================================================

/// Lazy pixel iterator over a Bresenham line, both endpoints included.
///
/// Yields `max(|dx|, |dy|) + 1` points. Swapping the two endpoints yields
/// the same set of pixels.
#[derive(Debug, Clone)]
pub struct LinePixels {
    primary: i32,
    secondary: i32,
    slope: f64,
    error: f64,
    steep: bool,
    remaining: u64,
}

impl LinePixels {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (mut x1, mut y1, mut x2, mut y2) = (x1, y1, x2, y2);

        // Left to right.
        if x1 > x2 {
            core::mem::swap(&mut x1, &mut x2);
            core::mem::swap(&mut y1, &mut y2);
        }

        // Endpoints can be up to 2^32 - 1 apart.
        let dx = x2 as i64 - x1 as i64;
        let dy = y2 as i64 - y1 as i64;

        if dx >= dy.abs() {
            // dx == 0 here means dy == 0 too: a single pixel.
            let slope = if dx == 0 { 0.0 } else { dy as f64 / dx as f64 };
            Self {
                primary: x1,
                secondary: y1,
                slope,
                error: 0.0,
                steep: false,
                remaining: dx as u64 + 1,
            }
        } else {
            // Steep lines run bottom to top in y.
            if y1 > y2 {
                core::mem::swap(&mut x1, &mut x2);
                core::mem::swap(&mut y1, &mut y2);
            }
            Self {
                primary: y1,
                secondary: x1,
                slope: (x2 as i64 - x1 as i64) as f64 / (y2 as i64 - y1 as i64) as f64,
                error: 0.0,
                steep: true,
                remaining: dy.unsigned_abs() + 1,
            }
        }
    }

    /// True if y is the primary (stepping) axis.
    #[inline]
    pub fn is_steep(&self) -> bool {
        self.steep
    }

    /// Per-step increment of the error term.
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[inline]
    fn step(&mut self) {
        // Only called while pixels remain, so the primary end is not passed.
        self.primary += 1;
        self.error += self.slope;
        if self.slope <= 0.0 {
            if self.error < -0.5 {
                self.secondary = self.secondary.saturating_sub(1);
                self.error += 1.0;
            }
        } else if self.error > 0.5 {
            self.secondary = self.secondary.saturating_add(1);
            self.error -= 1.0;
        }
    }
}

impl Iterator for LinePixels {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.remaining == 0 {
            return None;
        }
        let p = if self.steep {
            PointI::new(self.secondary, self.primary)
        } else {
            PointI::new(self.primary, self.secondary)
        };
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePixels {}

impl core::iter::FusedIterator for LinePixels {}

// ============================================================================
// Drawing entry points
// ============================================================================

/// Rasterize the line from (x1, y1) to (x2, y2) into `sink` with a single
/// color.
pub fn draw_line<S: PixelSink + ?Sized>(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgb,
    sink: &mut S,
) {
    let line = LinePixels::new(x1, y1, x2, y2);
    log::trace!(
        "line ({x1}, {y1}) -> ({x2}, {y2}): {} pixels, steep={}",
        line.len(),
        line.is_steep()
    );
    let color = color.clamped();
    for p in line {
        sink.put_pixel(p.x, p.y, color);
    }
}

/// Rasterize a line and collect the pixel writes.
pub fn line_pixels(x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    draw_line(x1, y1, x2, y2, color, &mut pixels);
    pixels
}

// ============================================================================
// Tests
// ============================================================================
