//! Construction errors.
//!
//! Only malformed control-point counts and out-of-range smoothness levels
//! are errors. Degenerate geometry
//! (zero-length lines, zero-height triangles, single-segment splines) is
//! handled by no-op branches in the rasterizers and smoothing passes.

use thiserror::Error;

/// Errors raised when a curve or spline is built from the wrong number of
/// control points, or a smoothness level is out of range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A cubic Bézier segment takes exactly four control points.
    #[error("cubic Bezier segment needs 4 control points, got {0}")]
    SegmentPointCount(usize),
    /// A spline of `k` segments takes `3k + 1` control points, `k >= 1`.
    #[error("spline needs 3k+1 control points with k >= 1, got {0}")]
    SplinePointCount(usize),
    #[error("smoothness level must be 0, 1 or 2, got {0}")]
    SmoothnessLevel(u8),
}

pub type Result<T> = core::result::Result<T, Error>;
