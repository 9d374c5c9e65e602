use super::*;

const BOUNDS: Rect = Rect::from_size(10, 10);

#[test]
fn empty_stack_yields_bounds() {
    let s = ClipStack::new();
    assert_eq!(s.current(BOUNDS), BOUNDS);
    assert!(s.is_empty());
}

#[test]
fn push_intersects_with_current_top() {
    let mut s = ClipStack::new();
    assert_eq!(
        s.push(BOUNDS, Rect::from_coords(-3, 2, 6, 20)),
        Rect::from_coords(0, 2, 6, 9)
    );
    assert_eq!(
        s.push(BOUNDS, Rect::from_coords(4, 0, 8, 4)),
        Rect::from_coords(4, 2, 6, 4)
    );
    assert_eq!(s.depth(), 2);
    assert_eq!(s.current(BOUNDS), Rect::from_coords(4, 2, 6, 4));
}

#[test]
fn pop_restores_previous_clip() {
    let mut s = ClipStack::new();
    s.push(BOUNDS, Rect::from_coords(1, 1, 5, 5));
    s.push(BOUNDS, Rect::from_coords(3, 3, 8, 8));
    assert_eq!(s.pop().unwrap(), Rect::from_coords(3, 3, 5, 5));
    assert_eq!(s.current(BOUNDS), Rect::from_coords(1, 1, 5, 5));
    s.pop().unwrap();
    assert_eq!(s.current(BOUNDS), BOUNDS);
}

#[test]
fn pop_on_empty_stack_is_invalid_clip_state() {
    let mut s = ClipStack::new();
    let err = s.pop().unwrap_err();
    assert!(matches!(err, RasterError::InvalidClipState(_)));

    s.push(BOUNDS, BOUNDS);
    s.pop().unwrap();
    assert!(matches!(s.pop(), Err(RasterError::InvalidClipState(_))));
}

#[test]
fn current_tracks_shrunken_bounds() {
    let mut s = ClipStack::new();
    s.push(BOUNDS, Rect::from_coords(2, 2, 8, 8));
    assert_eq!(s.current(Rect::from_size(5, 5)), Rect::from_coords(2, 2, 4, 4));
}

#[test]
fn disjoint_push_yields_invalid_clip() {
    let mut s = ClipStack::new();
    s.push(BOUNDS, Rect::from_coords(0, 0, 2, 2));
    let r = s.push(BOUNDS, Rect::from_coords(5, 5, 7, 7));
    assert!(!r.is_valid());
    assert!(!s.current(BOUNDS).is_valid());
}
