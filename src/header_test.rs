use super::*;

#[test]
fn offset_at_the_threshold_is_not_scrolled() {
    assert!(!is_scrolled(SCROLL_THRESHOLD_PX));
}

#[test]
fn offset_above_the_threshold_is_scrolled() {
    assert!(is_scrolled(SCROLL_THRESHOLD_PX + 0.1));
    assert!(is_scrolled(500.0));
}

#[test]
fn offset_below_the_threshold_is_not_scrolled() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(9.9));
}
