//! Chained cubic Bézier splines and control-point smoothing.
//!
//! A spline of `k` segments is `3k + 1` control points; segment `i` uses
//! points `3i ..= 3i + 3`, so every point at an index divisible by three
//! (other than the ends) is a joint shared by two segments.
//!
//! Smoothing returns new control points, never touching the caller's:
//!
//! - **C0** copies the points; joints stay sharp corners.
//! - **C1** moves each interior joint to the midpoint of its two handles,
//!   so the tangent direction matches across the joint.
//! - **C2** first rebuilds the handles from the unsmoothed joints (treated as
//!   the tips of a control polygon) so curvature matches, then reapplies the
//!   C1 joint pass.

use core::fmt;

use crate::basics::Point3;
use crate::curves::CubicBezier;
use crate::error::{Error, Result};

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

// ============================================================================
// Smoothness
// ============================================================================

/// Continuity enforced across spline joints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Smoothness {
    #[default]
    C0,
    C1,
    C2,
}

impl Smoothness {
    /// Numeric level: 0, 1 or 2.
    pub fn level(self) -> u8 {
        match self {
            Smoothness::C0 => 0,
            Smoothness::C1 => 1,
            Smoothness::C2 => 2,
        }
    }

    /// One level smoother, saturating at C2.
    pub fn increase(self) -> Self {
        match self {
            Smoothness::C0 => Smoothness::C1,
            Smoothness::C1 | Smoothness::C2 => Smoothness::C2,
        }
    }

    /// One level rougher, saturating at C0.
    pub fn decrease(self) -> Self {
        match self {
            Smoothness::C0 | Smoothness::C1 => Smoothness::C0,
            Smoothness::C2 => Smoothness::C1,
        }
    }
}

impl TryFrom<u8> for Smoothness {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Smoothness::C0),
            1 => Ok(Smoothness::C1),
            2 => Ok(Smoothness::C2),
            _ => Err(Error::SmoothnessLevel(level)),
        }
    }
}

impl fmt::Display for Smoothness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.level())
    }
}

// ============================================================================
// Length validation
// ============================================================================

/// True if `len` control points form a whole number (at least one) of
/// cubic segments.
#[inline]
pub fn is_spline_len(len: usize) -> bool {
    len >= 4 && (len - 1) % 3 == 0
}

fn check_len(len: usize) -> Result<usize> {
    if is_spline_len(len) {
        Ok((len - 1) / 3)
    } else {
        log::debug!("rejected spline with {len} control points");
        Err(Error::SplinePointCount(len))
    }
}

// ============================================================================
// Smoothing passes (in place, on validated lengths)
// ============================================================================

/// Interior joints `3, 6, ..` become the midpoint of their neighbors.
fn c1_joints(p: &mut [Point3]) {
    let len = p.len();
    let mut j = 3;
    while j + 3 < len {
        p[j] = p[j - 1].midpoint(p[j + 1]);
        j += 3;
    }
}

/// Handle placement for curvature continuity. Joints are left for
/// `c1_joints`.
fn c2_handles(p: &mut [Point3]) {
    let len = p.len();

    // Outermost handles: natural end condition.
    p[2] = p[1].midpoint(p[3]);
    p[len - 3] = p[len - 4].midpoint(p[len - 2]);

    // Inner segments: thirds of the leg between neighbouring tips.
    let mut i = 4;
    while i + 3 < len {
        let tip1 = p[i - 1];
        let tip2 = p[i + 2];
        p[i] = tip1 * TWO_THIRDS + tip2 * ONE_THIRD;
        p[i + 1] = tip1 * ONE_THIRD + tip2 * TWO_THIRDS;
        i += 3;
    }
}

fn apply_smoothness(p: &mut [Point3], level: Smoothness) {
    // A single segment has no interior joint to smooth.
    if p.len() <= 4 {
        return;
    }
    match level {
        Smoothness::C0 => {}
        Smoothness::C1 => c1_joints(p),
        Smoothness::C2 => {
            c2_handles(p);
            c1_joints(p);
        }
    }
}

// ============================================================================
// Spline
// ============================================================================

/// Control points of a chain of cubic Bézier segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    points: Vec<Point3>,
}

impl Spline {
    /// Takes ownership of `points`; the length must be `3k + 1`, `k >= 1`.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        check_len(points.len())?;
        Ok(Self { points })
    }

    pub fn from_slice(points: &[Point3]) -> Result<Self> {
        check_len(points.len())?;
        Ok(Self {
            points: points.to_vec(),
        })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Segments in order; consecutive segments share their joint point.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|w| CubicBezier::new(w[0], w[1], w[2], w[3]))
    }

    /// Concatenated samples of every segment, `samples_per_segment + 1`
    /// each. Joints appear twice: as the end of one segment and the start
    /// of the next.
    pub fn sample(&self, samples_per_segment: u32) -> Vec<Point3> {
        let mut out =
            Vec::with_capacity(self.segment_count() * (samples_per_segment as usize + 1));
        for segment in self.segments() {
            out.extend(segment.samples(samples_per_segment));
        }
        out
    }

    /// A smoothed copy.
    pub fn smooth(&self, level: Smoothness) -> Spline {
        let mut points = self.points.clone();
        apply_smoothness(&mut points, level);
        Spline { points }
    }

    /// A copy with x scaled by `sx` and y by `sy`.
    pub fn scale(&self, sx: f64, sy: f64) -> Spline {
        Spline {
            points: scale(&self.points, sx, sy),
        }
    }
}

impl TryFrom<Vec<Point3>> for Spline {
    type Error = Error;

    fn try_from(points: Vec<Point3>) -> Result<Self> {
        Self::new(points)
    }
}

// ============================================================================
// Slice-level entry points
// ============================================================================

/// Sample every segment of the spline given by `points`.
///
/// A length that is not `3k + 1` is rejected before any segment is sampled.
pub fn sample_spline(points: &[Point3], samples_per_segment: u32) -> Result<Vec<Point3>> {
    check_len(points.len())?;
    Ok(points
        .windows(4)
        .step_by(3)
        .flat_map(|w| CubicBezier::new(w[0], w[1], w[2], w[3]).samples(samples_per_segment))
        .collect())
}

/// C0 smoothing: an unchanged copy of any input.
pub fn smooth_c0(points: &[Point3]) -> Vec<Point3> {
    points.to_vec()
}

/// C1 smoothing: each interior joint becomes the midpoint of its handles.
pub fn smooth_c1(points: &[Point3]) -> Result<Vec<Point3>> {
    smooth(points, Smoothness::C1)
}

/// C2 smoothing: handles rebuilt for matching curvature, then the C1 pass.
pub fn smooth_c2(points: &[Point3]) -> Result<Vec<Point3>> {
    smooth(points, Smoothness::C2)
}

/// Smooth a spline's control points to the requested continuity.
pub fn smooth(points: &[Point3], level: Smoothness) -> Result<Vec<Point3>> {
    check_len(points.len())?;
    let mut out = points.to_vec();
    apply_smoothness(&mut out, level);
    Ok(out)
}

/// Scale x by `sx` and y by `sy`; z is kept.
pub fn scale(points: &[Point3], sx: f64, sy: f64) -> Vec<Point3> {
    points
        .iter()
        .map(|p| Point3::new(p.x * sx, p.y * sy, p.z))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
