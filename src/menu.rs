//! Mobile navigation menu open/close.
//!
//! The open flag lives in [`MenuState`]; an `active` class on both the
//! navigation container and the toggle control is its DOM projection,
//! kept in lockstep on every transition.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::consts::{MENU_ACTIVE_CLASS, MENU_TOGGLE_SELECTOR, NAV_SELECTOR};
use crate::dom;

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Whether the mobile menu is open. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Following a navigation link closes an open menu and leaves a
    /// closed one closed.
    #[must_use]
    pub fn after_link_activation(self) -> Self {
        Self { open: false }
    }
}

/// Wire the toggle control and the close-on-link behavior. No-op when
/// either the control or the navigation container is missing.
pub fn mount(document: &Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query(document, MENU_TOGGLE_SELECTOR),
        dom::query(document, NAV_SELECTOR),
    ) else {
        return;
    };

    let state = Rc::new(Cell::new(MenuState::default()));

    {
        let state = Rc::clone(&state);
        let nav = nav.clone();
        let toggle_el = toggle.clone();
        dom::on_click(&toggle, move || {
            let next = state.get().toggled();
            state.set(next);
            project(&nav, &toggle_el, next);
        });
    }

    for link in dom::query_all_within(&nav, "a") {
        let state = Rc::clone(&state);
        let nav = nav.clone();
        let toggle_el = toggle.clone();
        dom::on_click(&link, move || {
            if state.get().open {
                let next = state.get().after_link_activation();
                state.set(next);
                project(&nav, &toggle_el, next);
            }
        });
    }
}

fn project(nav: &Element, toggle: &Element, state: MenuState) {
    dom::set_class(nav, MENU_ACTIVE_CLASS, state.open);
    dom::set_class(toggle, MENU_ACTIVE_CLASS, state.open);
}
