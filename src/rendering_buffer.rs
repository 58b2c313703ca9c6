//! Rendering buffer: an owned RGB8 framebuffer.
//!
//! Rows are stored top-down, `width` pixels each. Writes outside the buffer
//! are clipped silently, so rasterizers can be pointed at it without
//! bounds-checking their own output.

use crate::color::{Rgb, Rgb8};
use crate::pixel_sink::PixelSink;

/// Owned RGB8 framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgb8>,
}

impl RenderingBuffer {
    /// Create a buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb8) -> Self {
        Self {
            width,
            height,
            data: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel with `c`.
    pub fn clear(&mut self, c: Rgb8) {
        self.data.fill(c);
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        self.offset(x, y).map(|i| self.data[i])
    }

    /// Overwrite the pixel at (x, y). Out-of-bounds writes are dropped.
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = c;
        }
    }

    /// One row of pixels, or `None` below the last row.
    pub fn row(&self, y: u32) -> Option<&[Rgb8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.data.get(start..start + self.width as usize)
    }

    /// Packed `RGBRGB...` bytes, row-major, top-to-bottom.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for c in &self.data {
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }
}

impl PixelSink for RenderingBuffer {
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        self.copy_pixel(x, y, Rgb8::from_rgb(color));
    }
}

// ============================================================================
// Tests
// ============================================================================
