//! Progressive enhancement layer for a static page.
//!
//! This crate is compiled to WebAssembly and loaded by the page it
//! enhances. It never renders markup of its own: the HTML and CSS are
//! authored in the page, and this crate only wires event listeners to
//! elements that already exist, projecting a handful of booleans onto
//! CSS classes. Every element lookup is optional; a missing element
//! disables only the controller that wanted it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`enhancer`] | One-shot mount that wires every controller |
//! | [`loader`] | Hides the loading splash after page load |
//! | [`theme`] | Dark/light theme with persisted preference |
//! | [`menu`] | Mobile navigation menu open/close |
//! | [`header`] | "Scrolled" visual state on the fixed header |
//! | [`reveal`] | Reveal-on-viewport-entry animations |
//! | [`parallax`] | Scroll-linked offsets for decorative shapes |
//! | [`footer`] | Current year in the footer |
//! | [`sched`] | Animation-frame coalescing primitives |
//! | [`dom`] | web-sys lookup and listener glue |
//! | [`consts`] | Class names, selectors, thresholds, delays |

pub mod consts;
pub mod dom;
pub mod enhancer;
pub mod footer;
pub mod header;
pub mod loader;
pub mod menu;
pub mod parallax;
pub mod reveal;
pub mod sched;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point. Defers mounting until the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        dom::on_event_once(&document, "DOMContentLoaded", enhancer::mount);
    } else {
        enhancer::mount();
    }
}
