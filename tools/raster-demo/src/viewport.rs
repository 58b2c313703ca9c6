//! World to device mapping for the spline scene.
//!
//! Orthogonal only: a world rectangle with y pointing up is fitted inside
//! the device rectangle (y pointing down) with its aspect ratio kept and
//! centered in the spare space.

use raster_curves::Point3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    wx1: f64,
    wy2: f64,
    k: f64,
    dx: f64,
    dy: f64,
}

impl Viewport {
    /// Fit the world rectangle `(wx1, wy1)..(wx2, wy2)` into a
    /// `width` x `height` device.
    pub fn meet(wx1: f64, wy1: f64, wx2: f64, wy2: f64, width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let (ww, wh) = (wx2 - wx1, wy2 - wy1);
        let k = (w / ww).min(h / wh);
        let k = if k.is_finite() && k > 0.0 { k } else { 1.0 };
        Self {
            wx1,
            wy2,
            k,
            dx: (w - ww * k) * 0.5,
            dy: (h - wh * k) * 0.5,
        }
    }

    /// Device pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.k
    }

    pub fn transform(&self, p: Point3) -> Point3 {
        Point3::new(
            (p.x - self.wx1) * self.k + self.dx,
            (self.wy2 - p.y) * self.k + self.dy,
            p.z,
        )
    }

    pub fn transform_all(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|&p| self.transform(p)).collect()
    }
}
