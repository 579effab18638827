//! Scroll-linked vertical offsets for decorative shapes.
//!
//! Each decorative element gets `translateY(scrollY * speed)` layered on
//! top of whatever non-translation transform it already carries. The speed
//! cycles by element index, with a slower triple for the organic hero
//! shapes. Scroll events coalesce through a [`FrameTask`]: a newly
//! scheduled update cancels and replaces a pending one.
//!
//! The previous `translateY` component is stripped from the inline
//! transform before each recompute, so repeated updates never accumulate.
//! When no inline transform exists, the computed transform is used as the
//! base with its `matrix(..)` wrapper textually stripped. That recovery is
//! only exact for translation-free bases; composed 2D/3D transforms are
//! out of scope and left as-is.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::consts::{DECORATION_SELECTOR, DECORATION_SPEEDS, ORGANIC_SHAPE_CLASS, ORGANIC_SPEEDS};
use crate::dom;
use crate::reveal;
use crate::sched::FrameTask;

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Scroll speed for the element at `index`, cycling through a triple.
#[must_use]
pub fn speed_for(index: usize, organic: bool) -> f64 {
    let speeds = if organic { ORGANIC_SPEEDS } else { DECORATION_SPEEDS };
    speeds[index % speeds.len()]
}

/// Remove every `translateY(..)` component from a transform string.
/// Surrounding whitespace is trimmed; interior spacing is left alone.
#[must_use]
pub fn strip_translate_y(transform: &str) -> String {
    const NEEDLE: &str = "translateY(";
    let mut out = String::with_capacity(transform.len());
    let mut rest = transform;
    while let Some(pos) = rest.find(NEEDLE) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + NEEDLE.len()..];
        match after.find(')') {
            Some(end) => rest = &after[end + 1..],
            None => rest = "",
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Reduce a computed transform to a usable base: `none` becomes empty,
/// and a `matrix(..)`/`matrix3d(..)` wrapper is textually stripped. Only
/// a translation-free base survives this exactly.
#[must_use]
pub fn strip_matrix_wrapper(computed: &str) -> String {
    if computed == "none" {
        return String::new();
    }
    let mut out = computed.to_string();
    if let Some(start) = out.find("matrix") {
        if let Some(open) = out.rfind('(') {
            if open > start {
                out.replace_range(start..=open, "");
            }
        }
    }
    if let Some(close) = out.find(')') {
        out.remove(close);
    }
    out
}

/// Layer a vertical translation onto `base`.
#[must_use]
pub fn compose(base: &str, y_px: f64) -> String {
    format!("{base} translateY({y_px}px)")
}

/// Wire the scroll listener. Active only when `IntersectionObserver`
/// exists and at least one decorative element is present.
pub fn mount(document: &Document) {
    if !reveal::observer_supported() {
        return;
    }
    let decorations = dom::query_all(document, DECORATION_SELECTOR);
    if decorations.is_empty() {
        return;
    }

    let task = FrameTask::new();
    dom::on_scroll(move || {
        let decorations = decorations.clone();
        task.schedule(move || update_all(&decorations));
    });
}

fn update_all(decorations: &[Element]) {
    let Some(window) = dom::window() else {
        return;
    };
    let scroll_y = window.page_y_offset().unwrap_or_default();

    for (index, element) in decorations.iter().enumerate() {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let organic = dom::has_class(element, ORGANIC_SHAPE_CLASS);
        let y_px = scroll_y * speed_for(index, organic);

        let style = html.style();
        let inline = style.get_property_value("transform").unwrap_or_default();
        let mut base = strip_translate_y(&inline);
        if base.is_empty() {
            base = strip_matrix_wrapper(&computed_transform(&window, element));
        }
        let _ = style.set_property("transform", &compose(&base, y_px));
    }
}

fn computed_transform(window: &Window, element: &Element) -> String {
    window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("transform").ok())
        .unwrap_or_default()
}
