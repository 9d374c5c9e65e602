use super::*;
use crate::scan::scanner::ScanRow;

fn scanned(shape: &impl Shape, height: usize, clip: Rect) -> Scanner {
    let mut s = Scanner::with_capacity(height);
    s.reset(clip.min.y, clip.max.y);
    shape.scan(&mut s, clip);
    s
}

#[test]
fn kurbo_rect_is_half_open() {
    let s = scanned(&kurbo::Rect::new(2.0, 2.0, 10.0, 10.0), 20, Rect::from_size(20, 20));
    assert_eq!((s.y_min(), s.y_max()), (2, 9));
    assert_eq!(s[2], ScanRow::new(2.0, 9.0));
    assert_eq!(s[9].cell_span(), Some((2, 9)));
}

#[test]
fn kurbo_rect_corners_may_be_swapped() {
    let a = scanned(&kurbo::Rect::new(2.0, 2.0, 10.0, 10.0), 20, Rect::from_size(20, 20));
    let b = scanned(&kurbo::Rect::new(10.0, 10.0, 2.0, 2.0), 20, Rect::from_size(20, 20));
    for y in 0..20 {
        assert_eq!(a.row(y), b.row(y));
    }
}

#[test]
fn fractional_rect_touches_partial_cells() {
    let s = scanned(&kurbo::Rect::new(2.5, 1.0, 10.5, 3.0), 10, Rect::from_size(20, 10));
    assert_eq!(s[1], ScanRow::new(2.5, 9.5));
    assert_eq!(s[1].cell_span(), Some((2, 10)));
}

#[test]
fn circle_rows_are_symmetric() {
    let circle = kurbo::Circle::new((10.0, 10.0), 5.0);
    let s = scanned(&circle, 20, Rect::from_size(20, 20));
    assert_eq!((s.y_min(), s.y_max()), (5, 14));
    for y in 5..=9 {
        assert_eq!(s[y], s[19 - y], "row {y}");
    }
    let widest = s[9];
    assert!((widest.min - 5.025).abs() < 1e-3);
    assert!((widest.max - 13.975).abs() < 1e-3);
    assert!(s[5].max - s[5].min < widest.max - widest.min);
}

#[test]
fn clipped_circle_keeps_ghost_continuation() {
    let circle = kurbo::Circle::new((10.0, 10.0), 5.0);
    let clip = Rect::from_coords(0, 0, 8, 9);
    let s = scanned(&circle, 20, clip);
    assert_eq!((s.y_min(), s.y_max()), (5, 9));
    assert!(s.is_y_max_clipped());
    assert!(!s.is_y_min_clipped());
    assert_eq!(s[9].max, 8.0);
    assert_eq!(s.below(9), Some(s[10]));
}

#[test]
fn zero_radius_circle_is_empty() {
    let s = scanned(&kurbo::Circle::new((4.0, 4.0), 0.0), 10, Rect::from_size(10, 10));
    assert_eq!(s.rows().count(), 0);
}
