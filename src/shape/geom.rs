use crate::{
    foundation::core::Rect,
    scan::scanner::Scanner,
    shape::{Shape, row_span, span},
};

/// Half-open geometric rectangle `[x0, x1) x [y0, y1)`.
impl Shape for kurbo::Rect {
    fn scan(&self, scanner: &mut Scanner, clip: Rect) {
        let r = self.abs();
        let extent = span(r.x0, r.x1);
        scanner.scan_rows(row_span(r.y0, r.y1), clip, |_| extent);
    }
}

/// Disc sampled at each row center.
impl Shape for kurbo::Circle {
    fn scan(&self, scanner: &mut Scanner, clip: Rect) {
        let (c, r) = (self.center, self.radius.abs());
        let r2 = r * r;
        scanner.scan_rows(row_span(c.y - r, c.y + r), clip, |y| {
            let dy = f64::from(y) + 0.5 - c.y;
            let h2 = r2 - dy * dy;
            if h2 <= 0.0 {
                return None;
            }
            let half = h2.sqrt();
            span(c.x - half, c.x + half)
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/geom.rs"]
mod tests;
