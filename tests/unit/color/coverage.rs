use super::*;

fn row(min: f32, max: f32) -> ScanRow {
    ScanRow::new(min, max)
}

fn total(c: &RowCoverage) -> f32 {
    let (x0, x1) = c.pixel_range().unwrap();
    (x0..=x1).map(|px| c.coverage(px)).sum()
}

fn area(c: &RowCoverage) -> f32 {
    let (t, b) = (c.top(), c.bottom());
    (t.max + b.max) * 0.5 + 1.0 - (t.min + b.min) * 0.5
}

#[test]
fn vertical_edges_cover_fractional_end_cells() {
    let c = RowCoverage::new(row(2.25, 8.5), row(2.25, 8.5));
    assert_eq!(c.pixel_range(), Some((2, 9)));
    assert_eq!(c.core(), Some((3, 8)));
    assert!((c.coverage(2) - 0.75).abs() < 1e-6);
    assert!((c.coverage(9) - 0.5).abs() < 1e-6);
    assert_eq!(c.coverage(5), 1.0);
    assert_eq!(c.coverage(1), 0.0);
    assert_eq!(c.coverage(10), 0.0);
}

#[test]
fn integer_extent_has_no_fringe() {
    let c = RowCoverage::new(row(2.0, 10.0), row(2.0, 10.0));
    assert_eq!(c.pixel_range(), Some((2, 10)));
    assert_eq!(c.core(), Some((2, 10)));
    assert!((2..=10).all(|px| c.coverage(px) == 1.0));
}

#[test]
fn core_pixels_are_fully_covered() {
    let c = RowCoverage::new(row(1.3, 12.6), row(4.9, 9.2));
    let (c0, c1) = c.core().unwrap();
    assert_eq!((c0, c1), (5, 9));
    for px in c0..=c1 {
        assert_eq!(c.coverage(px), 1.0, "px {px}");
    }
    for px in [1, 2, 3, 4, 10, 11, 12, 13] {
        let v = c.coverage(px);
        assert!(v > 0.0 && v < 1.0, "px {px} coverage {v}");
    }
}

#[test]
fn coverage_sums_to_slice_area() {
    let cases = [
        (row(2.25, 9.0), row(4.75, 9.0)),
        (row(0.1, 3.3), row(0.9, 7.7)),
        (row(5.5, 5.5), row(2.0, 11.0)),
        (row(3.2, 3.2), row(3.6, 3.7)),
        (row(10.0, 10.4), row(-3.0, 2.5)),
        (row(7.0, 7.0), row(7.0, 7.0)),
    ];
    for (top, bottom) in cases {
        let c = RowCoverage::new(top, bottom);
        let (sum, want) = (total(&c), area(&c));
        assert!(
            (sum - want).abs() < 1e-4,
            "top {top:?} bottom {bottom:?}: sum {sum} area {want}"
        );
    }
}

#[test]
fn left_and_right_edges_are_mirror_images() {
    let c = RowCoverage::new(row(2.3, 7.0), row(3.9, 7.0));
    // Mirror about x = 5: L -> 9 - R, R -> 9 - L (cells mirror px -> 9 - px).
    let m = RowCoverage::new(row(2.0, 6.7), row(2.0, 5.1));
    for px in 0..=10 {
        assert!((c.coverage(px) - m.coverage(9 - px)).abs() < 1e-5, "px {px}");
    }
}

#[test]
fn neighbors_place_boundaries_half_way() {
    let c = RowCoverage::from_neighbors(row(4.0, 8.0), Some(row(6.0, 8.0)), Some(row(2.0, 8.0)));
    assert_eq!(c.top(), row(5.0, 8.0));
    assert_eq!(c.bottom(), row(3.0, 8.0));
}

#[test]
fn endpoints_mirror_the_present_boundary() {
    let top_end = RowCoverage::from_neighbors(row(4.0, 6.0), None, Some(row(2.0, 8.0)));
    assert_eq!(top_end.bottom(), row(3.0, 7.0));
    assert_eq!(top_end.top(), row(5.0, 5.0));

    let bottom_end = RowCoverage::from_neighbors(row(4.0, 6.0), Some(row(2.0, 8.0)), None);
    assert_eq!(bottom_end.top(), row(3.0, 7.0));
    assert_eq!(bottom_end.bottom(), row(5.0, 5.0));
}

#[test]
fn lone_row_uses_its_own_extent() {
    let c = RowCoverage::from_neighbors(row(1.5, 4.5), None, None);
    assert_eq!(c.top(), row(1.5, 4.5));
    assert_eq!(c.bottom(), row(1.5, 4.5));
}

#[test]
fn coverage_stays_in_unit_range_for_crossed_boundaries() {
    let c = RowCoverage::new(row(6.0, 4.0), row(3.0, 8.0));
    let (x0, x1) = c.pixel_range().unwrap();
    for px in x0 - 1..=x1 + 1 {
        let v = c.coverage(px);
        assert!((0.0..=1.0).contains(&v));
    }
}
