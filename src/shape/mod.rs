pub(crate) mod geom;
pub(crate) mod path;

use std::ops::RangeInclusive;

use crate::{
    foundation::core::Rect,
    scan::scanner::{ScanRow, Scanner},
};

/// Something that can be rasterized.
///
/// `scan` writes the shape's extent into every row of `[scanner.y_min(), scanner.y_max()]` it
/// intersects, already limited to `clip`'s columns, and sets the clipped flags when the shape
/// continues past either end of the range. [`Scanner::scan_rows`] does all of this given the
/// shape's row span and a per-row extent.
pub trait Shape {
    /// Populate `scanner` for the region inside `clip`.
    fn scan(&self, scanner: &mut Scanner, clip: Rect);
}

impl<S: Shape + ?Sized> Shape for &S {
    fn scan(&self, scanner: &mut Scanner, clip: Rect) {
        (**self).scan(scanner, clip)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn scan(&self, scanner: &mut Scanner, clip: Rect) {
        (**self).scan(scanner, clip)
    }
}

/// Every cell of the rectangle, rows `min.y..=max.y` with extent `{min.x, max.x}`.
impl Shape for Rect {
    fn scan(&self, scanner: &mut Scanner, clip: Rect) {
        let extent = ScanRow::new(self.min.x as f32, self.max.x as f32);
        scanner.scan_rows(self.min.y..=self.max.y, clip, |_| Some(extent));
    }
}

/// Grid rows whose centers fall inside `[top, bottom)`.
pub(crate) fn row_span(top: f64, bottom: f64) -> RangeInclusive<i32> {
    let first = (top - 0.5).ceil() as i32;
    let last = ((bottom - 0.5).ceil() as i32).saturating_sub(1);
    first..=last
}

/// Row extent of the geometric interval `[left, right)`.
///
/// Slivers narrower than one cell keep a single-cell extent at `left`.
pub(crate) fn span(left: f64, right: f64) -> Option<ScanRow> {
    if !(left < right) {
        return None;
    }
    let min = left as f32;
    Some(ScanRow::new(min, ((right - 1.0) as f32).max(min)))
}

#[cfg(test)]
#[path = "../../tests/unit/shape/rect.rs"]
mod tests;
