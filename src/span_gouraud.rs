//! Gouraud triangle fill: a triangle with per-vertex colors.
//!
//! Vertices are arranged top to bottom, the triangle is classified as
//! flat-bottom, flat-top or general, and each flat part is walked one
//! scanline at a time from its apex toward its flat edge. Every scanline
//! becomes a [`GradientSpan`] whose endpoint positions and colors come from
//! the two edges; the span is then drawn with [`draw_gradient_hline`].
//!
//! A general triangle is split at the middle vertex's scanline and drawn
//! flat-top part first: that pass covers rows `y3` up to `y2` inclusive, then
//! the flat-bottom pass covers rows `y1 .. y2`. A pure flat-bottom triangle
//! therefore does not draw its bottom row, while a flat-top triangle draws
//! its top row.

use crate::color::Rgb;
use crate::pixel_sink::{Pixel, PixelSink};

// ============================================================================
// ColoredVertex
// ============================================================================

/// Triangle vertex with integer position and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl ColoredVertex {
    pub fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self { x, y, color }
    }
}

/// Sort vertices by ascending y, ties broken by ascending x.
///
/// The sort is stable, so fully identical vertices keep their input order
/// and the same three inputs always come back in the same order.
pub fn arrange_vertices(
    v1: ColoredVertex,
    v2: ColoredVertex,
    v3: ColoredVertex,
) -> [ColoredVertex; 3] {
    let mut v = [v1, v2, v3];
    v.sort_by(|a, b| a.y.cmp(&b.y).then(a.x.cmp(&b.x)));
    v
}

// ============================================================================
// TriangleKind
// ============================================================================

/// Shape class of a y-sorted triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    /// All three vertices on one scanline.
    Degenerate,
    /// `y2 == y3`: apex on top, flat edge at the bottom.
    FlatBottom,
    /// `y1 == y2`: flat edge on top, apex at the bottom.
    FlatTop,
    General,
}

impl TriangleKind {
    /// Classify vertices already sorted by [`arrange_vertices`].
    pub fn classify(v: &[ColoredVertex; 3]) -> Self {
        if v[0].y == v[2].y {
            TriangleKind::Degenerate
        } else if v[1].y == v[2].y {
            TriangleKind::FlatBottom
        } else if v[0].y == v[1].y {
            TriangleKind::FlatTop
        } else {
            TriangleKind::General
        }
    }
}

// ============================================================================
// GradientSpan
// ============================================================================

/// One scanline of a triangle: endpoints and their interpolated colors.
///
/// `x1` is not necessarily left of `x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpan {
    pub y: i32,
    pub x1: f64,
    pub c1: Rgb,
    pub x2: f64,
    pub c2: Rgb,
}

// ============================================================================
// Edge walking
// ============================================================================

/// Position and color along one triangle edge, per unit of y.
struct EdgeInterpolator {
    apex_y: i32,
    x: f64,
    color: Rgb,
    dx: f64,
    dc: Rgb,
}

impl EdgeInterpolator {
    /// `None` for a horizontal edge.
    fn new(apex: &ColoredVertex, base: &ColoredVertex) -> Option<Self> {
        // Widened: vertices may sit anywhere in i32.
        let h = base.y as i64 - apex.y as i64;
        if h == 0 {
            return None;
        }
        let h = h as f64;
        Some(Self {
            apex_y: apex.y,
            x: apex.x as f64,
            color: apex.color,
            dx: (base.x as i64 - apex.x as i64) as f64 / h,
            dc: (base.color - apex.color) / h,
        })
    }

    #[inline]
    fn at(&self, y: i32) -> (f64, Rgb) {
        let k = (y as i64 - self.apex_y as i64) as f64;
        (self.x + self.dx * k, self.color + self.dc * k)
    }
}

#[inline]
fn span_between(a: &EdgeInterpolator, b: &EdgeInterpolator, y: i32) -> GradientSpan {
    let (x1, c1) = a.at(y);
    let (x2, c2) = b.at(y);
    GradientSpan { y, x1, c1, x2, c2 }
}

/// Rows `v[0].y .. v[1].y` walking down from the top apex.
fn flat_bottom_pass(v: &[ColoredVertex; 3], f: &mut impl FnMut(GradientSpan)) {
    let (Some(a), Some(b)) = (
        EdgeInterpolator::new(&v[0], &v[2]),
        EdgeInterpolator::new(&v[0], &v[1]),
    ) else {
        log::debug!("flat-bottom pass skipped: zero height at y={}", v[0].y);
        return;
    };
    for y in v[0].y..v[1].y {
        f(span_between(&a, &b, y));
    }
}

/// Rows `v[2].y` up to `v[1].y` inclusive, walking up from the bottom apex.
fn flat_top_pass(v: &[ColoredVertex; 3], f: &mut impl FnMut(GradientSpan)) {
    let (Some(a), Some(b)) = (
        EdgeInterpolator::new(&v[2], &v[0]),
        EdgeInterpolator::new(&v[2], &v[1]),
    ) else {
        log::debug!("flat-top pass skipped: zero height at y={}", v[2].y);
        return;
    };
    for y in (v[1].y..=v[2].y).rev() {
        f(span_between(&a, &b, y));
    }
}

// ============================================================================
// GouraudTriangle
// ============================================================================

/// A triangle ready for gradient filling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GouraudTriangle {
    vertices: [ColoredVertex; 3],
    kind: TriangleKind,
}

impl GouraudTriangle {
    pub fn new(v1: ColoredVertex, v2: ColoredVertex, v3: ColoredVertex) -> Self {
        let vertices = arrange_vertices(v1, v2, v3);
        let kind = TriangleKind::classify(&vertices);
        Self { vertices, kind }
    }

    /// The vertices in arranged (top to bottom) order.
    pub fn vertices(&self) -> &[ColoredVertex; 3] {
        &self.vertices
    }

    pub fn kind(&self) -> TriangleKind {
        self.kind
    }

    /// Visit every scanline span in drawing order.
    pub fn for_each_span(&self, mut f: impl FnMut(GradientSpan)) {
        match self.kind {
            TriangleKind::Degenerate => {
                log::debug!(
                    "triangle skipped: all vertices on scanline {}",
                    self.vertices[0].y
                );
            }
            TriangleKind::FlatBottom => flat_bottom_pass(&self.vertices, &mut f),
            TriangleKind::FlatTop => flat_top_pass(&self.vertices, &mut f),
            TriangleKind::General => {
                flat_top_pass(&self.vertices, &mut f);
                flat_bottom_pass(&self.vertices, &mut f);
            }
        }
    }

    /// All scanline spans in drawing order.
    pub fn spans(&self) -> Vec<GradientSpan> {
        let mut spans = Vec::new();
        self.for_each_span(|s| spans.push(s));
        spans
    }

    /// Fill the triangle into `sink`.
    pub fn render<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        log::trace!("gouraud triangle {:?}", self.kind);
        self.for_each_span(|s| draw_gradient_hline(s.x1, s.c1, s.x2, s.c2, s.y, sink));
    }
}

// ============================================================================
// Drawing entry points
// ============================================================================

/// Draw a horizontal color gradient on row `y` from `x1` to `x2`.
///
/// Endpoints given right to left are swapped together with their colors.
/// Pixels start at `x1` truncated toward zero and continue while `x <= x2`,
/// never past `i32::MAX`; pixel `k` gets `c1 + k * (c2 - c1) / (x2 - x1)`,
/// clamped only as it is written.
pub fn draw_gradient_hline<S: PixelSink + ?Sized>(
    x1: f64,
    c1: Rgb,
    x2: f64,
    c2: Rgb,
    y: i32,
    sink: &mut S,
) {
    if !x1.is_finite() || !x2.is_finite() {
        return;
    }
    let (x1, c1, x2, c2) = if x1 > x2 {
        (x2, c2, x1, c1)
    } else {
        (x1, c1, x2, c2)
    };

    let width = x2 - x1;
    let dc = if width > 0.0 {
        (c2 - c1) / width
    } else {
        Rgb::default()
    };

    // `as` saturates, so both ends stay inside i32 and the range is finite.
    let start = x1 as i32;
    let end = x2.floor() as i32;
    for (k, x) in (start..=end).enumerate() {
        sink.put_pixel(x, y, (c1 + dc * k as f64).clamped());
    }
}

/// Fill a triangle with vertex colors linearly interpolated across it.
pub fn fill_gradient_triangle<S: PixelSink + ?Sized>(
    v1: ColoredVertex,
    v2: ColoredVertex,
    v3: ColoredVertex,
    sink: &mut S,
) {
    GouraudTriangle::new(v1, v2, v3).render(sink);
}

/// Fill a triangle and collect the pixel writes.
pub fn gradient_triangle_pixels(
    v1: ColoredVertex,
    v2: ColoredVertex,
    v3: ColoredVertex,
) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    fill_gradient_triangle(v1, v2, v3, &mut pixels);
    pixels
}

// ============================================================================
// Tests
// ============================================================================
