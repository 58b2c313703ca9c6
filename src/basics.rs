//! Foundation types shared by the rasterizers and the curve engine.
//!
//! Integer pixel coordinates (`PointI`), three-component control points
//! (`Point3`) with component-wise arithmetic, and the rounding helpers used
//! when converting between the two.

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Round a double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Screen-space pixel coordinate.
pub type PointI = PointBase<i32>;

// ============================================================================
// Point3
// ============================================================================

/// A point (or vector) in 3D with f64 components.
///
/// Control points and curve samples are `Point3`. Every operator acts on
/// each axis independently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the z = 0 plane.
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Linear interpolation: `self + (other - self) * k`.
    #[inline]
    pub fn lerp(self, other: Point3, k: f64) -> Point3 {
        self + (other - self) * k
    }

    /// The point halfway between `self` and `other`, `0.5 * (self + other)`.
    #[inline]
    pub fn midpoint(self, other: Point3) -> Point3 {
        (self + other) * 0.5
    }

    /// Round x and y to the nearest pixel, dropping z.
    pub fn to_pixel(self) -> PointI {
        PointI::new(iround(self.x), iround(self.y))
    }
}

impl Add for Point3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Point3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }
}

impl Mul<Point3> for f64 {
    type Output = Point3;
    fn mul(self, p: Point3) -> Point3 {
        p * self
    }
}

impl Div<f64> for Point3 {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self {
            x: self.x / k,
            y: self.y / k,
            z: self.z / k,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iround() {
        assert_eq!(iround(0.5), 1);
        assert_eq!(iround(0.49), 0);
        assert_eq!(iround(-0.5), -1);
        assert_eq!(iround(-0.49), 0);
        assert_eq!(iround(1.5), 2);
        assert_eq!(iround(-1.5), -2);
        assert_eq!(iround(0.0), 0);
    }

    #[test]
    fn test_uround() {
        assert_eq!(uround(0.5), 1);
        assert_eq!(uround(0.49), 0);
        assert_eq!(uround(254.6), 255);
        assert_eq!(uround(0.0), 0);
    }

    #[test]
    fn test_point3_arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 8.0);
        assert_eq!(a + b, Point3::new(5.0, 8.0, 11.0));
        assert_eq!(b - a, Point3::new(3.0, 4.0, 5.0));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Point3::new(2.0, 3.0, 4.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_point3_midpoint_and_lerp() {
        let a = Point3::new_2d(0.0, 0.0);
        let b = Point3::new_2d(10.0, -4.0);
        assert_eq!(a.midpoint(b), Point3::new_2d(5.0, -2.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Point3::new_2d(2.5, -1.0));
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(Point3::new(1.4, -2.6, 9.0).to_pixel(), PointI::new(1, -3));
    }
}
