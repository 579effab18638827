//! Dark/light theme with a persisted preference.
//!
//! The applied theme is projected onto a `dark-mode` class on `<body>` and
//! mirrored into `localStorage` on every change. Storage failures are
//! logged and otherwise ignored: the visual theme still applies in-memory
//! when persistence is unavailable.

use log::warn;
use web_sys::Document;

use crate::consts::{DARK_MODE_CLASS, PREFERS_DARK_QUERY, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::dom;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two supported themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but the two known strings is
    /// treated as absent.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Pick the startup theme: a saved preference wins, then the operating
/// system's reported color scheme, then light.
#[must_use]
pub fn choose_initial(saved: Option<Theme>, prefers_dark: bool) -> Theme {
    match saved {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Apply the startup theme and wire the toggle control.
pub fn mount(document: &Document) {
    apply(document, choose_initial(read_saved(), prefers_dark()));

    if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let document = document.clone();
        dom::on_click(&toggle, move || {
            apply(&document, applied(&document).opposite());
        });
    }
}

/// The theme currently applied to the page, read from the body class.
#[must_use]
pub fn applied(document: &Document) -> Theme {
    let dark = document
        .body()
        .is_some_and(|body| dom::has_class(&body, DARK_MODE_CLASS));
    if dark { Theme::Dark } else { Theme::Light }
}

/// Project `theme` onto the body class and persist it best-effort.
pub fn apply(document: &Document, theme: Theme) {
    if let Some(body) = document.body() {
        dom::set_class(&body, DARK_MODE_CLASS, theme == Theme::Dark);
    }
    persist(theme);
}

fn persist(theme: Theme) {
    let Some(window) = dom::window() else {
        return;
    };
    match window.local_storage() {
        Ok(Some(storage)) => {
            if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                warn!("theme preference not persisted: {err:?}");
            }
        }
        Ok(None) => warn!("localStorage unavailable; theme preference not persisted"),
        Err(err) => warn!("localStorage unavailable: {err:?}"),
    }
}

fn read_saved() -> Option<Theme> {
    let window = dom::window()?;
    match window.local_storage() {
        Ok(Some(storage)) => match storage.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                warn!("theme preference not read: {err:?}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

fn prefers_dark() -> bool {
    dom::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}
