//! # raster-curves
//!
//! Aliased scan conversion and cubic spline math for small software
//! renderers.
//!
//! Two independent cores, plus the pieces that tie them to pixels:
//!
//! - **Rasterizer**: Bresenham lines in all eight octants
//!   ([`bresenham_line`]) and vertex-color gradient triangle fill by
//!   flat-bottom / flat-top scanline walking ([`span_gouraud`]).
//! - **Curve engine**: cubic Bézier evaluation and sampling ([`curves`]),
//!   chained Bézier splines with C0 / C1 / C2 control-point smoothing
//!   ([`spline`]).
//!
//! Rasterizers write through the [`PixelSink`] trait. A `Vec<Pixel>`
//! collects the writes, [`RenderingBuffer`] stores them as RGB8, and
//! [`RendererPrimitives`] composes lines, triangles and splines into shapes.
//!
//! The library logs through the `log` facade and never installs a logger.
//!
//! ```
//! use raster_curves::{fill_gradient_triangle, ColoredVertex, Pixel, Rgb};
//!
//! let mut pixels: Vec<Pixel> = Vec::new();
//! fill_gradient_triangle(
//!     ColoredVertex::new(0, 0, Rgb::RED),
//!     ColoredVertex::new(-10, 10, Rgb::GREEN),
//!     ColoredVertex::new(10, 10, Rgb::BLUE),
//!     &mut pixels,
//! );
//! assert!(!pixels.is_empty());
//! ```

// Foundation types
pub mod basics;
pub mod color;
pub mod error;

// Pixel output
pub mod pixel_sink;
pub mod rendering_buffer;

// Rasterizer
pub mod bresenham_line;
pub mod span_gouraud;

// Curve engine
pub mod curves;
pub mod spline;

// Composition
pub mod renderer_primitives;

pub use basics::{Point3, PointI};
pub use bresenham_line::{draw_line, line_pixels, LinePixels};
pub use color::{Rgb, Rgb8};
pub use curves::{CubicBezier, CurveSamples};
pub use error::{Error, Result};
pub use pixel_sink::{FnSink, Pixel, PixelSink};
pub use renderer_primitives::RendererPrimitives;
pub use rendering_buffer::RenderingBuffer;
pub use span_gouraud::{
    arrange_vertices, draw_gradient_hline, fill_gradient_triangle, gradient_triangle_pixels,
    ColoredVertex, GouraudTriangle, GradientSpan, TriangleKind,
};
pub use spline::{sample_spline, scale, smooth, smooth_c0, smooth_c1, smooth_c2, Smoothness, Spline};
