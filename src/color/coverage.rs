use crate::scan::scanner::ScanRow;

/// Edge geometry of one anti-aliased row.
///
/// `top` and `bottom` are the shape's extents at the upper and lower boundary of the row; the
/// left and right edges run straight between them. Coverage of a column is the exact area of the
/// pixel inside both edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowCoverage {
    top: ScanRow,
    bottom: ScanRow,
}

impl RowCoverage {
    /// Coverage between explicit boundary extents.
    pub fn new(top: ScanRow, bottom: ScanRow) -> Self {
        Self { top, bottom }
    }

    /// Boundary extents derived from a row and its real neighbors.
    ///
    /// Each boundary lies half way to the neighbor. At a true endpoint the missing boundary mirrors
    /// the present one through the row; a lone row uses its own extent for both.
    pub fn from_neighbors(row: ScanRow, above: Option<ScanRow>, below: Option<ScanRow>) -> Self {
        let (top, bottom) = match (above, below) {
            (Some(a), Some(b)) => (row.midpoint(a), row.midpoint(b)),
            (None, Some(b)) => {
                let half = row.midpoint(b);
                (row.extrapolate(half), half)
            }
            (Some(a), None) => {
                let half = row.midpoint(a);
                (half, row.extrapolate(half))
            }
            (None, None) => (row, row),
        };
        Self { top, bottom }
    }

    /// Both boundaries limited to columns `[lo, hi]`.
    pub fn clip_x(self, lo: f32, hi: f32) -> Self {
        Self {
            top: self.top.clip_x(lo, hi),
            bottom: self.bottom.clip_x(lo, hi),
        }
    }

    /// Extent at the top boundary.
    pub fn top(&self) -> ScanRow {
        self.top
    }

    /// Extent at the bottom boundary.
    pub fn bottom(&self) -> ScanRow {
        self.bottom
    }

    /// Columns with any coverage: the union of both boundaries, rounded outward.
    pub fn pixel_range(&self) -> Option<(i32, i32)> {
        let lo = self.top.min.min(self.bottom.min);
        let hi = self.top.max.max(self.bottom.max);
        (lo <= hi).then(|| (lo.floor() as i32, hi.ceil() as i32))
    }

    /// Fully covered columns: the intersection of both boundaries, rounded toward the center
    /// (ceiling on the left, floor on the right).
    pub fn core(&self) -> Option<(i32, i32)> {
        let lo = self.top.min.max(self.bottom.min).ceil() as i32;
        let hi = self.top.max.min(self.bottom.max).floor() as i32;
        (lo <= hi).then_some((lo, hi))
    }

    /// Fraction of column `px` covered by the shape, in `[0, 1]`.
    pub fn coverage(&self, px: i32) -> f32 {
        let px = f64::from(px);
        // Left edge: part of [px, px+1) right of L. Right edge: part left of R+1.
        let left = clamped_mean(
            px + 1.0 - f64::from(self.top.min),
            px + 1.0 - f64::from(self.bottom.min),
        );
        let right = clamped_mean(
            f64::from(self.top.max) + 1.0 - px,
            f64::from(self.bottom.max) + 1.0 - px,
        );
        (left + right - 1.0).clamp(0.0, 1.0) as f32
    }
}

/// Mean of `clamp(f, 0, 1)` for `f` running linearly from `f0` to `f1`.
fn clamped_mean(f0: f64, f1: f64) -> f64 {
    if f0 >= 1.0 && f1 >= 1.0 {
        return 1.0;
    }
    if f0 <= 0.0 && f1 <= 0.0 {
        return 0.0;
    }
    let d = f1 - f0;
    if d.abs() < 1e-9 {
        return f0.clamp(0.0, 1.0);
    }
    (ramp_integral(f1) - ramp_integral(f0)) / d
}

/// Antiderivative of `clamp(t, 0, 1)`.
fn ramp_integral(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        t - 0.5
    } else {
        0.5 * t * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/coverage.rs"]
mod tests;
