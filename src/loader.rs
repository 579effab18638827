//! Hides the loading splash once the page has loaded.
//!
//! Two independent paths mark the splash hidden: a short delay after the
//! `load` event, and a failsafe timeout from mount so the splash never
//! persists when the `load` event is late or never fires.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::consts::{LOADER_FAILSAFE_MS, LOADER_HIDDEN_CLASS, LOADER_HIDE_DELAY_MS, LOADER_ID};
use crate::dom;

pub fn mount(document: &Document) {
    if document.ready_state() == "complete" {
        // Mounted after the load event already fired.
        Timeout::new(LOADER_HIDE_DELAY_MS, hide).forget();
    } else if let Some(window) = dom::window() {
        dom::on_event_once(&window, "load", || {
            Timeout::new(LOADER_HIDE_DELAY_MS, hide).forget();
        });
    }

    Timeout::new(LOADER_FAILSAFE_MS, hide).forget();
}

fn hide() {
    let Some(loader) = dom::document().and_then(|d| d.get_element_by_id(LOADER_ID)) else {
        return;
    };
    if !dom::has_class(&loader, LOADER_HIDDEN_CLASS) {
        dom::set_class(&loader, LOADER_HIDDEN_CLASS, true);
    }
}
