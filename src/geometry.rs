//! Screen-space geometry.
//!
//! Integer pixel points and rectangles in virtual-screen coordinates,
//! with the handful of operations the evader needs: inflation,
//! containment, union and center.

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// The deltas are squared as integers before the square root so the
    /// result matches a plain `sqrt(dx*dx + dy*dy)` exactly.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        ((dx * dx + dy * dy) as f64).sqrt()
    }
}

/// An axis-aligned rectangle stored as its four edges.
///
/// `right` and `bottom` are the far edges, so `width == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Union of all monitor work areas. Computed once at startup.
pub type ScreenBounds = Rect;

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle from its top-left corner and size.
    pub const fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// True when the rectangle covers no area.
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Center point, halving width and height with integer division.
    pub const fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// Grows the rectangle by `margin` on every side.
    pub const fn inflate(&self, margin: i32) -> Self {
        Self::new(
            self.left - margin,
            self.top - margin,
            self.right + margin,
            self.bottom + margin,
        )
    }

    /// Closed containment: points on any edge count as inside.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Smallest rectangle covering both `self` and `other`.
    ///
    /// Empty rectangles contribute nothing, so folding from
    /// `Rect::default()` does not drag the origin into the result.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Same size, new top-left corner.
    pub const fn moved_to(&self, top_left: Point) -> Rect {
        Rect::from_origin_size(top_left.x, top_left.y, self.width(), self.height())
    }
}
