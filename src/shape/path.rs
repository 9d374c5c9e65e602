use kurbo::{PathEl, Point};

use crate::{
    foundation::core::Rect,
    scan::scanner::{ScanRow, Scanner},
    shape::{Shape, row_span, span},
};

/// Any [`kurbo::Shape`] flattened into line segments.
///
/// Every subpath is treated as closed. A row's extent runs from the leftmost to the rightmost
/// edge crossing at the row center, which is exact for convex outlines and the row hull
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathShape {
    segments: Vec<(Point, Point)>,
    top: f64,
    bottom: f64,
}

impl PathShape {
    /// Flatten `shape` with the given tolerance (in cells).
    pub fn new(shape: &impl kurbo::Shape, tolerance: f64) -> Self {
        let mut out = Self {
            segments: Vec::new(),
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
        };
        let mut start: Option<Point> = None;
        let mut last = Point::ZERO;
        kurbo::flatten(shape.path_elements(tolerance), tolerance, |el| match el {
            PathEl::MoveTo(p) => {
                if let Some(s) = start {
                    out.push(last, s);
                }
                start = Some(p);
                last = p;
            }
            PathEl::LineTo(p) => {
                out.push(last, p);
                last = p;
            }
            PathEl::ClosePath => {
                if let Some(s) = start.take() {
                    out.push(last, s);
                    last = s;
                }
            }
            // flatten only emits lines.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
        if let Some(s) = start {
            out.push(last, s);
        }
        out
    }

    /// Number of line segments after flattening.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn push(&mut self, a: Point, b: Point) {
        if a.y == b.y {
            return;
        }
        self.top = self.top.min(a.y.min(b.y));
        self.bottom = self.bottom.max(a.y.max(b.y));
        self.segments.push((a, b));
    }

    /// Extent of the crossings at height `yc`. Each segment owns `[lower y, upper y)`.
    fn extent_at(&self, yc: f64) -> Option<ScanRow> {
        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(a, b) in &self.segments {
            let (p, q) = if a.y < b.y { (a, b) } else { (b, a) };
            if yc < p.y || yc >= q.y {
                continue;
            }
            let x = p.x + (yc - p.y) * (q.x - p.x) / (q.y - p.y);
            lo = lo.min(x);
            hi = hi.max(x);
        }
        span(lo, hi)
    }
}

impl Shape for PathShape {
    fn scan(&self, scanner: &mut Scanner, clip: Rect) {
        if self.segments.is_empty() {
            scanner.restrict(1, 0);
            return;
        }
        scanner.scan_rows(row_span(self.top, self.bottom), clip, |y| {
            self.extent_at(f64::from(y) + 0.5)
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/path.rs"]
mod tests;
