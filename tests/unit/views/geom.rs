use super::*;

#[test]
fn contains_is_half_open() {
    let r = Rect::new(2, 3, 4, 5);
    assert!(r.contains(2, 3));
    assert!(r.contains(5, 7));
    assert!(!r.contains(6, 3));
    assert!(!r.contains(2, 8));
    assert!(!r.contains(1, 3));
}

#[test]
fn empty_rect_contains_nothing() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(r.is_empty());
    assert!(!r.contains(0, 0));
}

#[test]
fn edges_saturate() {
    let r = Rect::new(u16::MAX - 1, 0, 10, 1);
    assert_eq!(r.right(), u16::MAX);
    assert_eq!(r.bottom(), 1);
}
