use super::*;

fn scanned(shape: &impl Shape, height: usize, clip: Rect) -> Scanner {
    let mut s = Scanner::with_capacity(height);
    s.reset(clip.min.y, clip.max.y);
    shape.scan(&mut s, clip);
    s
}

#[test]
fn rect_rows_cover_inclusive_corners() {
    let s = scanned(&Rect::from_coords(2, 2, 10, 10), 20, Rect::from_size(20, 20));
    assert_eq!((s.y_min(), s.y_max()), (2, 10));
    assert!(!s.is_y_min_clipped() && !s.is_y_max_clipped());
    for y in 2..=10 {
        assert_eq!(s[y], ScanRow::new(2.0, 10.0));
    }
    assert!(s[1].is_empty());
    assert!(s[11].is_empty());
}

#[test]
fn clipped_rect_records_continuation() {
    let clip = Rect::from_coords(0, 0, 4, 4);
    let s = scanned(&Rect::from_coords(2, 2, 10, 10), 10, clip);
    assert_eq!((s.y_min(), s.y_max()), (2, 4));
    assert!(!s.is_y_min_clipped());
    assert!(s.is_y_max_clipped());
    assert_eq!(s[3], ScanRow::new(2.0, 4.0));
    assert_eq!(s[5], ScanRow::new(2.0, 4.0));
    assert_eq!(s.below(4), Some(ScanRow::new(2.0, 4.0)));
    assert_eq!(s.above(2), None);
}

#[test]
fn rect_outside_clip_scans_nothing() {
    let s = scanned(&Rect::from_coords(2, 12, 8, 14), 20, Rect::from_coords(0, 0, 9, 9));
    assert!(s.is_empty());
    assert_eq!(s.rows().count(), 0);

    let s = scanned(&Rect::from_coords(12, 2, 14, 4), 20, Rect::from_coords(0, 0, 9, 9));
    assert_eq!(s.rows().count(), 0);
}

#[test]
fn inverted_rect_is_empty() {
    let s = scanned(&Rect::from_coords(5, 5, 2, 2), 10, Rect::from_size(10, 10));
    assert!(s.is_empty());
}

#[test]
fn row_span_samples_row_centers() {
    assert_eq!(row_span(2.0, 10.0), 2..=9);
    assert_eq!(row_span(2.4, 2.6), 2..=2);
    assert!(row_span(2.6, 3.4).is_empty());
    assert_eq!(row_span(-1.0, 1.0), -1..=0);
}

#[test]
fn span_converts_half_open_intervals() {
    assert_eq!(span(2.0, 10.0), Some(ScanRow::new(2.0, 9.0)));
    assert_eq!(span(2.5, 10.5), Some(ScanRow::new(2.5, 9.5)));
    assert_eq!(span(3.0, 3.5), Some(ScanRow::new(3.0, 3.0)));
    assert_eq!(span(5.0, 5.0), None);
    assert_eq!(span(f64::INFINITY, f64::NEG_INFINITY), None);
}

#[test]
fn references_and_boxes_forward() {
    let rect = Rect::from_coords(1, 1, 3, 3);
    let boxed: Box<dyn Shape> = Box::new(rect);
    let a = scanned(&rect, 5, Rect::from_size(5, 5));
    let b = scanned(&boxed, 5, Rect::from_size(5, 5));
    let c = scanned(&&rect, 5, Rect::from_size(5, 5));
    for y in 0..5 {
        assert_eq!(a[y], b[y]);
        assert_eq!(a[y], c[y]);
    }
}
