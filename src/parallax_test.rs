use super::*;

// =============================================================
// Speed selection
// =============================================================

#[test]
fn decoration_speeds_cycle_by_index() {
    assert_eq!(speed_for(0, false), -0.06);
    assert_eq!(speed_for(1, false), 0.03);
    assert_eq!(speed_for(2, false), -0.04);
    assert_eq!(speed_for(3, false), -0.06);
    assert_eq!(speed_for(7, false), 0.03);
}

#[test]
fn organic_shapes_use_the_slower_triple() {
    assert_eq!(speed_for(0, true), -0.02);
    assert_eq!(speed_for(1, true), 0.015);
    assert_eq!(speed_for(2, true), -0.025);
    assert_eq!(speed_for(5, true), -0.025);
}

#[test]
fn every_organic_speed_is_slower_than_its_decoration_counterpart() {
    for i in 0..3 {
        assert!(speed_for(i, true).abs() < speed_for(i, false).abs());
    }
}

// =============================================================
// translateY stripping
// =============================================================

#[test]
fn strip_removes_a_single_translate_y() {
    assert_eq!(strip_translate_y("translateY(12px)"), "");
    assert_eq!(strip_translate_y("rotate(20deg) translateY(-3.5px)"), "rotate(20deg)");
}

#[test]
fn strip_removes_every_translate_y_component() {
    assert_eq!(
        strip_translate_y("translateY(1px) scale(2) translateY(2px)"),
        "scale(2)"
    );
}

#[test]
fn strip_leaves_other_transforms_untouched() {
    assert_eq!(strip_translate_y("translateX(4px)"), "translateX(4px)");
    assert_eq!(strip_translate_y("rotate(45deg) scale(1.2)"), "rotate(45deg) scale(1.2)");
}

#[test]
fn strip_of_empty_is_empty() {
    assert_eq!(strip_translate_y(""), "");
}

#[test]
fn strip_tolerates_an_unclosed_component() {
    assert_eq!(strip_translate_y("scale(2) translateY(9px"), "scale(2)");
}

#[test]
fn stripping_a_composed_value_recovers_the_base() {
    let base = "rotate(20deg)";
    let composed = compose(base, 7.25);
    assert_eq!(strip_translate_y(&composed), base);
}

// =============================================================
// Computed-transform base recovery
// =============================================================

#[test]
fn none_becomes_an_empty_base() {
    assert_eq!(strip_matrix_wrapper("none"), "");
}

#[test]
fn matrix_wrapper_is_stripped_textually() {
    assert_eq!(strip_matrix_wrapper("matrix(1, 0, 0, 1, 0, 0)"), "1, 0, 0, 1, 0, 0");
}

#[test]
fn matrix3d_wrapper_is_stripped_too() {
    assert_eq!(
        strip_matrix_wrapper("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"),
        "1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1"
    );
}

#[test]
fn empty_computed_value_stays_empty() {
    assert_eq!(strip_matrix_wrapper(""), "");
}

// =============================================================
// Composition
// =============================================================

#[test]
fn compose_appends_a_vertical_translation() {
    assert_eq!(compose("rotate(20deg)", -1.8), "rotate(20deg) translateY(-1.8px)");
}

#[test]
fn compose_with_an_empty_base_keeps_the_leading_separator() {
    assert_eq!(compose("", 12.5), " translateY(12.5px)");
}

#[test]
fn compose_formats_a_zero_offset_plainly() {
    assert_eq!(compose("scale(2)", 0.0), "scale(2) translateY(0px)");
}

#[test]
fn repeated_strip_and_compose_does_not_accumulate() {
    let mut transform = "rotate(10deg) translateY(3px)".to_string();
    for _ in 0..4 {
        let base = strip_translate_y(&transform);
        transform = compose(&base, 5.0);
    }
    assert_eq!(transform, "rotate(10deg) translateY(5px)");
}
