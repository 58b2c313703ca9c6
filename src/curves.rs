//! Cubic Bézier curve evaluation and sampling.
//!
//! A [`CubicBezier`] is evaluated per axis in the cubic Bernstein basis:
//!
//! ```text
//! B(t) = (1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3,  t in [0, 1]
//! ```
//!
//! Sampling steps `t` in `count` equal parts, producing `count + 1` points
//! from `p0` to `p3` inclusive.

use crate::basics::Point3;
use crate::error::{Error, Result};

// ============================================================================
// Bernstein basis
// ============================================================================

#[inline]
fn b3p0(t: f64, p: f64) -> f64 {
    let k = 1.0 - t;
    k * k * k * p
}

#[inline]
fn b3p1(t: f64, p: f64) -> f64 {
    let k = 1.0 - t;
    3.0 * k * k * t * p
}

#[inline]
fn b3p2(t: f64, p: f64) -> f64 {
    let k = 1.0 - t;
    3.0 * k * t * t * p
}

#[inline]
fn b3p3(t: f64, p: f64) -> f64 {
    t * t * t * p
}

/// One axis of a cubic Bézier at `t`.
#[inline]
pub fn b3(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    b3p0(t, p0) + b3p1(t, p1) + b3p2(t, p2) + b3p3(t, p3)
}

// ============================================================================
// CubicBezier
// ============================================================================

/// A cubic Bézier segment: exactly four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Build from a slice, which must hold exactly four points.
    pub fn from_slice(points: &[Point3]) -> Result<Self> {
        let points: [Point3; 4] = points.try_into().map_err(|_| {
            log::debug!("rejected cubic segment with {} points", points.len());
            Error::SegmentPointCount(points.len())
        })?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    /// Point on the curve at parameter `t`.
    pub fn evaluate(&self, t: f64) -> Point3 {
        let [p0, p1, p2, p3] = self.points;
        Point3 {
            x: b3(t, p0.x, p1.x, p2.x, p3.x),
            y: b3(t, p0.y, p1.y, p2.y, p3.y),
            z: b3(t, p0.z, p1.z, p2.z, p3.z),
        }
    }

    /// Iterator over `count + 1` evenly spaced samples.
    pub fn samples(&self, count: u32) -> CurveSamples {
        CurveSamples {
            curve: *self,
            count,
            index: 0,
        }
    }

    /// `count + 1` points at `t = i / count`; `count == 0` gives just `p0`.
    pub fn sample(&self, count: u32) -> Vec<Point3> {
        self.samples(count).collect()
    }
}

impl From<[Point3; 4]> for CubicBezier {
    fn from(points: [Point3; 4]) -> Self {
        Self { points }
    }
}

impl TryFrom<&[Point3]> for CubicBezier {
    type Error = Error;

    fn try_from(points: &[Point3]) -> Result<Self> {
        Self::from_slice(points)
    }
}

// ============================================================================
// CurveSamples
// ============================================================================

/// Evenly spaced samples of a [`CubicBezier`].
///
/// `t` is computed as `index / count` for each sample rather than by adding
/// a step, so the last sample is exactly `p3`. A clone replays the
/// remaining samples; [`CubicBezier::samples`] starts a fresh pass.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    curve: CubicBezier,
    count: u32,
    index: u64,
}

impl Iterator for CurveSamples {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.index > self.count as u64 {
            return None;
        }
        let t = if self.count == 0 {
            0.0
        } else {
            self.index as f64 / self.count as f64
        };
        self.index += 1;
        Some(self.curve.evaluate(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.count as u64 + 1).saturating_sub(self.index) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CurveSamples {}

impl core::iter::FusedIterator for CurveSamples {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> CubicBezier {
        CubicBezier::new(
            Point3::new(-3.7, 12.1, 0.3),
            Point3::new(4.0, -8.0, 1.0),
            Point3::new(9.5, 7.25, -2.0),
            Point3::new(13.3, -0.6, 5.1),
        )
    }

    #[test]
    fn test_endpoints_exact() {
        let c = curve();
        assert_eq!(c.evaluate(0.0), c.points()[0]);
        assert_eq!(c.evaluate(1.0), c.points()[3]);
    }

    #[test]
    fn test_midpoint() {
        let c = CubicBezier::new(
            Point3::new_2d(0.0, 0.0),
            Point3::new_2d(0.0, 8.0),
            Point3::new_2d(8.0, 8.0),
            Point3::new_2d(8.0, 0.0),
        );
        // (1 + 3 + 3 + 1) / 8 weights: x = (0 + 0 + 3*8 + 8)/8, y = (0 + 24 + 24 + 0)/8
        assert_eq!(c.evaluate(0.5), Point3::new_2d(4.0, 6.0));
    }

    #[test]
    fn test_straight_line_is_linear() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 6.0, 9.0);
        let c = CubicBezier::new(a, a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = c.evaluate(t);
            let q = a.lerp(b, t);
            assert!((p.x - q.x).abs() < 1e-12);
            assert!((p.y - q.y).abs() < 1e-12);
            assert!((p.z - q.z).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_count_and_ends() {
        let c = curve();
        for n in [1, 2, 7, 20] {
            let samples = c.sample(n);
            assert_eq!(samples.len(), n as usize + 1);
            assert_eq!(samples[0], c.evaluate(0.0));
            assert_eq!(samples[n as usize], c.evaluate(1.0));
        }
    }

    #[test]
    fn test_sample_zero_count() {
        let c = curve();
        assert_eq!(c.sample(0), vec![c.points()[0]]);
    }

    #[test]
    fn test_samples_restartable() {
        let c = curve();
        let mut it = c.samples(4);
        assert_eq!(it.len(), 5);
        it.next();
        assert_eq!(it.len(), 4);
        let rest: Vec<_> = it.collect();
        assert_eq!(rest, c.sample(4)[1..].to_vec());
        assert_eq!(c.samples(4).collect::<Vec<_>>(), c.sample(4));
    }

    #[test]
    fn test_from_slice() {
        let pts = [Point3::ZERO; 4];
        assert!(CubicBezier::from_slice(&pts).is_ok());
        assert_eq!(
            CubicBezier::from_slice(&pts[..3]),
            Err(Error::SegmentPointCount(3))
        );
        assert_eq!(
            CubicBezier::try_from(&[Point3::ZERO; 5][..]),
            Err(Error::SegmentPointCount(5))
        );
    }
}
