/// Integer grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);
}

/// Integer rectangle with inclusive `min` and `max` corners.
///
/// A rectangle is valid when `min.x <= max.x && min.y <= max.y`; invalid rectangles are the
/// result of disjoint intersections and cover no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (inclusive).
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from inclusive corners.
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from inclusive corner coordinates.
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The bounds of a `width` x `height` grid.
    ///
    /// Empty grids yield an invalid rectangle.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::from_coords(0, 0, width - 1, height - 1)
    }

    /// Return `true` when the rectangle covers at least one cell.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Intersection of two rectangles. Disjoint inputs produce an invalid rectangle.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::from_coords(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        )
    }

    /// Number of columns covered (0 for invalid rectangles).
    pub fn width(&self) -> i32 {
        (self.max.x - self.min.x + 1).max(0)
    }

    /// Number of rows covered (0 for invalid rectangles).
    pub fn height(&self) -> i32 {
        (self.max.y - self.min.y + 1).max(0)
    }

    /// Return `true` when cell `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.min.x <= x && x <= self.max.x && self.min.y <= y && y <= self.max.y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
