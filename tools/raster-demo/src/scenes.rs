//! The demo scenes: a star of Bresenham lines, four gradient triangles
//! covering each fill case, and a 16-point Bézier spline.

use rand::Rng;
use raster_curves::{
    ColoredVertex, Point3, PointI, RendererPrimitives, RenderingBuffer, Rgb, Rgb8, Smoothness,
    Spline,
};

use crate::viewport::Viewport;

// ============================================================================
// Line star
// ============================================================================

/// `count` spokes of length `radius` fanned evenly around a center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStar {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
    pub count: u32,
}

impl Default for LineStar {
    fn default() -> Self {
        Self {
            center_x: 150,
            center_y: 150,
            radius: 100,
            count: 20,
        }
    }
}

impl LineStar {
    /// Outer end of each spoke, truncated toward zero.
    pub fn endpoints(&self) -> Vec<PointI> {
        let step = std::f64::consts::TAU / self.count as f64;
        let r = self.radius as f64;
        (0..self.count)
            .map(|i| {
                let a = step * i as f64;
                PointI::new(
                    self.center_x + (r * a.cos()) as i32,
                    self.center_y + (r * a.sin()) as i32,
                )
            })
            .collect()
    }

    /// Red spokes on white.
    pub fn render(&self, buf: &mut RenderingBuffer) {
        buf.clear(Rgb8::from_rgb(Rgb::WHITE));
        let mut prim = RendererPrimitives::new(buf);
        prim.set_line_color(Rgb::RED);
        for p in self.endpoints() {
            prim.line(self.center_x, self.center_y, p.x, p.y);
        }
    }
}

// ============================================================================
// Gradient triangles
// ============================================================================

const TRIANGLES: [[(i32, i32); 3]; 4] = [
    // General case.
    [(75, 20), (25, 75), (125, 130)],
    // Vertices out of y order, left and right edges flipped.
    [(125, 75), (75, 20), (25, 130)],
    // Flat bottom.
    [(25, 75), (125, 75), (75, 20)],
    // Flat top.
    [(25, 25), (125, 25), (75, 80)],
];

const TRIANGLE_STEP_X: i32 = 150;
const TRIANGLE_OFFSET_Y: i32 = 25;

/// The four sample triangles laid out left to right, vertices colored red,
/// green and blue in the order given.
pub fn demo_triangles() -> Vec<[ColoredVertex; 3]> {
    let colors = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];
    let mut ox = 0;
    TRIANGLES
        .iter()
        .map(|tri| {
            let v = |i: usize| {
                ColoredVertex::new(tri[i].0 + ox, tri[i].1 + TRIANGLE_OFFSET_Y, colors[i])
            };
            let out = [v(0), v(1), v(2)];
            ox += TRIANGLE_STEP_X;
            out
        })
        .collect()
}

/// Gradient fills with black outlines on white.
pub fn render_triangles(buf: &mut RenderingBuffer) {
    buf.clear(Rgb8::from_rgb(Rgb::WHITE));
    let mut prim = RendererPrimitives::new(buf);
    prim.set_line_color(Rgb::BLACK);
    for [a, b, c] in demo_triangles() {
        prim.outlined_gradient_triangle(a, b, c);
    }
}

// ============================================================================
// Spline
// ============================================================================

/// Control points per spline: five cubic segments.
pub const POINTS_COUNT: usize = 16;

const TEST_POINTS: [(f64, f64); POINTS_COUNT] = [
    (104.0, -236.0),
    (69.0, -131.0),
    (100.0, -100.0),
    (206.0, -166.0),
    (255.0, -150.0),
    (205.0, -100.0),
    (205.0, -27.0),
    (225.0, -50.0),
    (250.0, -100.0),
    (343.0, -131.0),
    (360.0, -150.0),
    (320.0, -200.0),
    (309.0, -235.0),
    (275.0, -250.0),
    (240.0, -269.0),
    (171.0, -198.0),
];

/// The fixed test set, scaled by 0.1 and moved into view.
pub fn test_points() -> Vec<Point3> {
    TEST_POINTS
        .iter()
        .map(|&(x, y)| Point3::new_2d(x * 0.1 - 20.0, y * 0.1 + 17.0))
        .collect()
}

/// A random walk: x steps by 2 from -20, y moves by up to 15 per point and
/// is clamped to [-10, 10].
pub fn random_points<R: Rng + ?Sized>(rng: &mut R) -> Vec<Point3> {
    let mut prev = 0.0;
    (0..POINTS_COUNT)
        .map(|i| {
            let y = (prev + rng.gen_range(-15..=15) as f64).clamp(-10.0, 10.0);
            prev = y;
            Point3::new_2d(i as f64 * 2.0 - 20.0, y)
        })
        .collect()
}

const CAMERA_DISTANCE: f64 = 30.0;
const FOV_Y_DEGREES: f64 = 80.0;
const VIEW_ASPECT: f64 = 4.0 / 3.0;

/// The world rectangle visible at z = 0 from the scene camera, fitted to
/// the device.
pub fn spline_viewport(width: u32, height: u32) -> Viewport {
    let half_h = CAMERA_DISTANCE * (FOV_Y_DEGREES.to_radians() * 0.5).tan();
    let half_w = half_h * VIEW_ASPECT;
    Viewport::meet(-half_w, -half_h, half_w, half_h, width, height)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplineScene {
    pub points: Vec<Point3>,
    pub smoothness: Smoothness,
    pub samples_per_segment: u32,
    pub scale: f64,
}

impl SplineScene {
    /// Control polygon in red, sampled spline in white, on black.
    ///
    /// Points are smoothed, then scaled, then mapped to the device.
    pub fn render(&self, buf: &mut RenderingBuffer) -> raster_curves::Result<()> {
        let world = Spline::from_slice(&self.points)?
            .smooth(self.smoothness)
            .scale(self.scale, self.scale);
        let vp = spline_viewport(buf.width(), buf.height());
        let device = Spline::new(vp.transform_all(world.points()))?;

        buf.clear(Rgb8::from_rgb(Rgb::BLACK));
        let mut prim = RendererPrimitives::new(buf);

        prim.set_line_color(Rgb::RED);
        prim.control_polygon(&device);
        for p in device.points() {
            let c = p.to_pixel();
            prim.line(c.x - 1, c.y, c.x + 1, c.y);
            prim.line(c.x, c.y - 1, c.x, c.y + 1);
        }

        prim.set_line_color(Rgb::WHITE);
        prim.spline(&device, self.samples_per_segment);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_line_star_endpoints() {
        let star = LineStar::default();
        let ends = star.endpoints();
        assert_eq!(ends.len(), 20);
        assert_eq!(ends[0], PointI::new(250, 150));
        assert_eq!(ends[5], PointI::new(150, 250));
        assert!(LineStar { count: 0, ..star }.endpoints().is_empty());
    }

    #[test]
    fn test_line_star_render() {
        let mut buf = RenderingBuffer::new(300, 300, Rgb8::default());
        LineStar::default().render(&mut buf);
        let red = Rgb8::from_rgb(Rgb::RED);
        assert_eq!(buf.pixel(150, 150), Some(red));
        assert_eq!(buf.pixel(250, 150), Some(red));
        assert_eq!(buf.pixel(0, 0), Some(Rgb8::from_rgb(Rgb::WHITE)));
    }

    #[test]
    fn test_triangles_layout() {
        let tris = demo_triangles();
        assert_eq!(tris.len(), 4);
        assert_eq!((tris[0][0].x, tris[0][0].y), (75, 45));
        assert_eq!((tris[3][2].x, tris[3][2].y), (75 + 450, 105));
        for tri in &tris {
            for v in tri {
                assert!((0..600).contains(&v.x) && (0..300).contains(&v.y));
            }
        }
    }

    #[test]
    fn test_render_triangles() {
        let mut buf = RenderingBuffer::new(600, 300, Rgb8::default());
        render_triangles(&mut buf);
        let black = Rgb8::from_rgb(Rgb::BLACK);
        // Vertices sit on the outline.
        assert_eq!(buf.pixel(75, 45), Some(black));
        assert_eq!(buf.pixel(25 + 450, 50), Some(black));
        // Fill between outlines.
        let inside = buf.pixel(75 + 450, 60);
        assert!(inside.is_some_and(|c| c != black && c != Rgb8::from_rgb(Rgb::WHITE)));
    }

    #[test]
    fn test_test_points() {
        let pts = test_points();
        assert_eq!(pts.len(), POINTS_COUNT);
        assert!(Spline::from_slice(&pts).is_ok());
        let first = pts[0];
        assert!((first.x - (-9.6)).abs() < 1e-9);
        assert!((first.y - (-6.6)).abs() < 1e-9);
    }

    #[test]
    fn test_random_points_seeded() {
        let a = random_points(&mut StdRng::seed_from_u64(7));
        let b = random_points(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), POINTS_COUNT);
        for (i, p) in a.iter().enumerate() {
            assert_eq!(p.x, i as f64 * 2.0 - 20.0);
            assert!((-10.0..=10.0).contains(&p.y));
            assert_eq!(p.y.fract(), 0.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_spline_scene_renders_inside_view() {
        for smoothness in [Smoothness::C0, Smoothness::C1, Smoothness::C2] {
            let scene = SplineScene {
                points: test_points(),
                smoothness,
                samples_per_segment: 20,
                scale: 1.0,
            };
            let mut buf = RenderingBuffer::new(640, 480, Rgb8::default());
            assert!(scene.render(&mut buf).is_ok());
            let white = Rgb8::from_rgb(Rgb::WHITE);
            let lit = (0..480)
                .filter_map(|y| buf.row(y))
                .flatten()
                .filter(|&&c| c == white)
                .count();
            assert!(lit > 100, "{smoothness}: {lit}");
        }
    }

    #[test]
    fn test_spline_scene_rejects_bad_len() {
        let scene = SplineScene {
            points: test_points()[..5].to_vec(),
            smoothness: Smoothness::C1,
            samples_per_segment: 20,
            scale: 1.0,
        };
        let mut buf = RenderingBuffer::new(64, 48, Rgb8::default());
        assert_eq!(
            scene.render(&mut buf),
            Err(raster_curves::Error::SplinePointCount(5))
        );
    }
}
