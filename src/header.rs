//! "Scrolled" visual state on the fixed header.
//!
//! Scroll events are sampled at most once per animation frame through a
//! [`FrameGate`]; each sample compares the vertical scroll offset to a
//! fixed threshold and projects the result onto a `header-scrolled`
//! class. One eager sample runs at mount for pages that load already
//! scrolled.

use web_sys::{Document, Element};

use crate::consts::{HEADER_ID, HEADER_SCROLLED_CLASS, SCROLL_THRESHOLD_PX};
use crate::dom;
use crate::sched::FrameGate;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// An offset exactly at the threshold does not count as scrolled.
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

pub fn mount(document: &Document) {
    let Some(header) = document.get_element_by_id(HEADER_ID) else {
        return;
    };

    sample(&header);

    let gate = FrameGate::new();
    dom::on_scroll(move || {
        let header = header.clone();
        gate.request(move || sample(&header));
    });
}

fn sample(header: &Element) {
    let offset = dom::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default();
    dom::set_class(header, HEADER_SCROLLED_CLASS, is_scrolled(offset));
}
