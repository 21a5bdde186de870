use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Pixel-space point. Serialized as `[x, y]`.
pub type Point2D = Point2<f64>;

/// Detected line segment given by its two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point2D,
    pub p2: Point2D,
}

impl LineSegment {
    pub fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    /// True when both endpoints share the same x (slope undefined).
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.dx() == 0.0
    }

    /// Slope `dy/dx`, or `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.dy() / self.dx())
        }
    }

    /// Slope-intercept form `(m, b)` of the supporting line `y = m x + b`.
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        let m = self.slope()?;
        Some((m, self.p1.y - m * self.p1.x))
    }
}
