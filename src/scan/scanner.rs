use std::ops::{Index, IndexMut, RangeInclusive};

use crate::foundation::core::Rect;

/// Horizontal extent of a shape at one grid row.
///
/// A row covers the geometric interval `[min, max + 1)`: cell `x` spans `[x, x + 1)`, so an
/// extent of `{2.0, 10.0}` covers cells `2..=10`. `min > max` means the row is empty.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScanRow {
    /// Left edge.
    pub min: f32,
    /// Right edge (left side of the last covered cell).
    pub max: f32,
}

impl ScanRow {
    /// A row that covers nothing.
    pub const EMPTY: Self = Self {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Create an extent.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Return `true` when the row covers nothing.
    pub fn is_empty(&self) -> bool {
        // NaN compares false everywhere, treat it as empty too.
        !(self.min <= self.max)
    }

    /// Intersect with the column range `[lo, hi]`.
    pub fn clip_x(self, lo: f32, hi: f32) -> Self {
        Self::new(self.min.max(lo), self.max.min(hi))
    }

    /// Component-wise midpoint, the edge position half way to a neighboring row.
    pub fn midpoint(self, other: ScanRow) -> Self {
        Self::new((self.min + other.min) * 0.5, (self.max + other.max) * 0.5)
    }

    /// Mirror `toward` through this row: continues the edge line one half row further.
    pub fn extrapolate(self, toward: ScanRow) -> Self {
        Self::new(2.0 * self.min - toward.min, 2.0 * self.max - toward.max)
    }

    /// Cells covered by a non-anti-aliased fill: `floor(min)..=ceil(max)`.
    pub fn cell_span(&self) -> Option<(i32, i32)> {
        if self.is_empty() {
            return None;
        }
        Some((self.min.floor() as i32, self.max.ceil() as i32))
    }
}

impl Default for ScanRow {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Row-indexed buffer of [`ScanRow`] extents for one draw.
///
/// Rows are addressed by grid row `y`. Besides the active range `[y_min, y_max]` the buffer has
/// room for one ghost row on each side (`y_min - 1` and `y_max + 1`); the clipped flags tell
/// whether a ghost row holds a real continuation of the shape that was clipped away.
#[derive(Debug, Clone)]
pub struct Scanner {
    rows: Vec<ScanRow>,
    y_min: i32,
    y_max: i32,
    y_min_clipped: bool,
    y_max_clipped: bool,
}

impl Scanner {
    /// Allocate a scanner for grids up to `height` rows tall.
    pub fn with_capacity(height: usize) -> Self {
        Self {
            rows: vec![ScanRow::EMPTY; height + 2],
            y_min: 0,
            y_max: -1,
            y_min_clipped: false,
            y_max_clipped: false,
        }
    }

    /// Number of addressable grid rows, ghost rows excluded.
    pub fn capacity(&self) -> usize {
        self.rows.len() - 2
    }

    /// First active row.
    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Last active row.
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Return `true` when the active range holds no rows.
    pub fn is_empty(&self) -> bool {
        self.y_min > self.y_max
    }

    /// Whether the ghost row above `y_min` continues the shape.
    pub fn is_y_min_clipped(&self) -> bool {
        self.y_min_clipped
    }

    /// Whether the ghost row below `y_max` continues the shape.
    pub fn is_y_max_clipped(&self) -> bool {
        self.y_max_clipped
    }

    /// Mark the ghost row above `y_min` as a clipped continuation (or not).
    pub fn set_y_min_clipped(&mut self, clipped: bool) {
        self.y_min_clipped = clipped;
    }

    /// Mark the ghost row below `y_max` as a clipped continuation (or not).
    pub fn set_y_max_clipped(&mut self, clipped: bool) {
        self.y_max_clipped = clipped;
    }

    /// Prepare for a draw over rows `[y_min, y_max]`.
    ///
    /// Every row in the range and both ghost rows are emptied and the clipped flags cleared.
    /// An empty range (`y_min > y_max`) is allowed.
    ///
    /// # Panics
    ///
    /// Panics when the range does not fit in `[0, capacity)`.
    pub fn reset(&mut self, y_min: i32, y_max: i32) {
        self.y_min = y_min;
        self.y_max = y_max;
        self.y_min_clipped = false;
        self.y_max_clipped = false;
        if y_min > y_max {
            return;
        }
        assert!(
            y_min >= 0 && (y_max as usize) < self.capacity(),
            "scanner range {y_min}..={y_max} exceeds capacity {}",
            self.capacity()
        );
        let lo = self.slot(y_min - 1);
        let hi = self.slot(y_max + 1);
        self.rows[lo..=hi].fill(ScanRow::EMPTY);
    }

    /// Narrow the active range to `[first, last]`, intersected with the current range.
    ///
    /// Clipped flags are left untouched; shapes set them after restricting.
    pub fn restrict(&mut self, first: i32, last: i32) {
        self.y_min = self.y_min.max(first);
        self.y_max = self.y_max.min(last);
    }

    /// Extent at row `y`. Rows outside the ghost-padded range read as empty.
    pub fn row(&self, y: i32) -> ScanRow {
        let i = i64::from(y) + 1;
        if i < 0 || i as usize >= self.rows.len() {
            return ScanRow::EMPTY;
        }
        self.rows[i as usize]
    }

    /// Extent of the row above `y` when it is a real continuation of the shape.
    ///
    /// That is: inside the active range, or the top ghost row with `is_y_min_clipped` set, and
    /// not empty.
    pub fn above(&self, y: i32) -> Option<ScanRow> {
        let continues = y > self.y_min || (y == self.y_min && self.y_min_clipped);
        self.neighbor(continues, y - 1)
    }

    /// Extent of the row below `y` when it is a real continuation of the shape.
    pub fn below(&self, y: i32) -> Option<ScanRow> {
        let continues = y < self.y_max || (y == self.y_max && self.y_max_clipped);
        self.neighbor(continues, y + 1)
    }

    fn neighbor(&self, continues: bool, y: i32) -> Option<ScanRow> {
        if !continues {
            return None;
        }
        let row = self.row(y);
        (!row.is_empty()).then_some(row)
    }

    /// Non-empty rows of the active range, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (i32, ScanRow)> + '_ {
        (self.y_min..=self.y_max)
            .map(|y| (y, self.row(y)))
            .filter(|(_, r)| !r.is_empty())
    }

    /// Populate rows from a shape's full row span.
    ///
    /// `rows` is every row the shape occupies, unclipped. Each visible row in the active range
    /// receives `extent(y)` clipped to `clip`'s columns (`None` marks an empty row). The active
    /// range is narrowed to the visible rows, and when the shape continues past either end the
    /// corresponding ghost row is written with that continuation and its clipped flag set.
    pub fn scan_rows(
        &mut self,
        rows: RangeInclusive<i32>,
        clip: Rect,
        mut extent: impl FnMut(i32) -> Option<ScanRow>,
    ) {
        let (first, last) = (*rows.start(), *rows.end());
        self.restrict(first, last);
        if self.is_empty() {
            return;
        }

        let (lo, hi) = (clip.min.x as f32, clip.max.x as f32);
        let mut clipped = |y: i32| {
            extent(y)
                .map(|r| r.clip_x(lo, hi))
                .filter(|r| !r.is_empty())
        };

        for y in self.y_min..=self.y_max {
            self[y] = clipped(y).unwrap_or(ScanRow::EMPTY);
        }

        if self.y_min > first {
            let ghost = clipped(self.y_min - 1);
            self.y_min_clipped = ghost.is_some();
            let g = self.y_min - 1;
            self[g] = ghost.unwrap_or(ScanRow::EMPTY);
        }
        if self.y_max < last {
            let ghost = clipped(self.y_max + 1);
            self.y_max_clipped = ghost.is_some();
            let g = self.y_max + 1;
            self[g] = ghost.unwrap_or(ScanRow::EMPTY);
        }
    }

    fn slot(&self, y: i32) -> usize {
        let i = i64::from(y) + 1;
        assert!(
            i >= 0 && (i as usize) < self.rows.len(),
            "scanner row {y} out of range (capacity {})",
            self.capacity()
        );
        i as usize
    }
}

impl Index<i32> for Scanner {
    type Output = ScanRow;

    fn index(&self, y: i32) -> &ScanRow {
        &self.rows[self.slot(y)]
    }
}

impl IndexMut<i32> for Scanner {
    fn index_mut(&mut self, y: i32) -> &mut ScanRow {
        let i = self.slot(y);
        &mut self.rows[i]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scan/scanner.rs"]
mod tests;
