//! Color types and operations.
//!
//! - `Rgb`: f64 components, the unclamped working space for interpolation.
//! - `Rgb8`: u8 components, what a framebuffer stores.
//!
//! Interpolated colors may leave `[0, 1]` while a gradient is being walked;
//! they are only clamped when a pixel is emitted.

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::basics::uround;

// ============================================================================
// Rgb (f64 precision color)
// ============================================================================

/// RGB color with f64 components, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Interpolate toward `c` by `k`, without clamping.
    #[inline]
    pub fn lerp(self, c: Rgb, k: f64) -> Rgb {
        self + (c - self) * k
    }

    /// Each channel clamped to `[0, 1]`.
    pub fn clamped(self) -> Rgb {
        Rgb {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl Add for Rgb {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for Rgb {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl SubAssign for Rgb {
    fn sub_assign(&mut self, rhs: Self) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }
}

impl Div<f64> for Rgb {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self {
            r: self.r / k,
            g: self.g / k,
            b: self.b / k,
        }
    }
}

// ============================================================================
// Rgb8 (8-bit per channel)
// ============================================================================

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BASE_MASK: u32 = 255;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from `Rgb`, clamping each channel first.
    pub fn from_rgb(c: Rgb) -> Self {
        let c = c.clamped();
        Self {
            r: uround(c.r * Self::BASE_MASK as f64) as u8,
            g: uround(c.g * Self::BASE_MASK as f64) as u8,
            b: uround(c.b * Self::BASE_MASK as f64) as u8,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r as f64 / Self::BASE_MASK as f64,
            g: self.g as f64 / Self::BASE_MASK as f64,
            b: self.b as f64 / Self::BASE_MASK as f64,
        }
    }
}

impl From<Rgb> for Rgb8 {
    fn from(c: Rgb) -> Self {
        Self::from_rgb(c)
    }
}

// ============================================================================
// Tests
// ============================================================================
