//! Geometry primitives shared by the interaction layer.
//!
//! Coordinates are unit-agnostic `f64` values. The TUI feeds terminal
//! cells; tests use whatever is convenient.

/// A point in viewport coordinates (x to the right, y downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Point at (`x`, `y`).
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation towards `other` by `t` (0 = self, 1 = other).
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Axis-aligned bounding box, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Box with its top-left corner at (`left`, `top`).
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Larger of the two box dimensions.
    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Pointer-region containment test. Empty boxes contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    /// Same box moved vertically by `dy`.
    pub fn offset_y(self, dy: f64) -> Bounds {
        Bounds {
            top: self.top + dy,
            ..self
        }
    }
}

impl From<ratatui::layout::Rect> for Bounds {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Bounds::new(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        )
    }
}
