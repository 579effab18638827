//! One-shot wiring of every page controller.
//!
//! Controllers are independent: each looks up its own elements and
//! declines to activate when they are missing, so a sparse page degrades
//! to whichever enhancements its markup supports.

use log::debug;

use crate::{dom, footer, header, loader, menu, parallax, reveal, theme};

/// Mount all controllers against the current document. Safe to call in a
/// non-browser environment, where it does nothing.
pub fn mount() {
    let Some(document) = dom::document() else {
        return;
    };

    loader::mount(&document);
    theme::mount(&document);
    menu::mount(&document);
    header::mount(&document);
    reveal::mount(&document);
    parallax::mount(&document);
    footer::mount(&document);

    debug!("page enhancements mounted");
}
