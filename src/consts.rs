//! Class names, selectors, thresholds, and delays shared by the controllers.

// ── Loader ──────────────────────────────────────────────────────

pub const LOADER_ID: &str = "loader";
pub const LOADER_HIDDEN_CLASS: &str = "hidden";

/// Delay between the page `load` event and hiding the splash, so the
/// first paint settles behind it.
pub const LOADER_HIDE_DELAY_MS: u32 = 100;

/// Failsafe: the splash is hidden this long after mount no matter what.
pub const LOADER_FAILSAFE_MS: u32 = 3000;

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_TOGGLE_ID: &str = "darkModeToggle";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Navigation menu ─────────────────────────────────────────────

pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_SELECTOR: &str = "header nav";
pub const MENU_ACTIVE_CLASS: &str = "active";

// ── Header ──────────────────────────────────────────────────────

pub const HEADER_ID: &str = "mainHeader";
pub const HEADER_SCROLLED_CLASS: &str = "header-scrolled";

/// Vertical scroll offset, in pixels, beyond which the header gets its
/// scrolled treatment. Strictly greater-than.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Parallax ────────────────────────────────────────────────────

pub const DECORATION_SELECTOR: &str = ".decoration, .organic-shape";
pub const ORGANIC_SHAPE_CLASS: &str = "organic-shape";

/// Per-element scroll speeds, cycled by element index.
pub const DECORATION_SPEEDS: [f64; 3] = [-0.06, 0.03, -0.04];

/// Slower speeds for the large organic hero shapes.
pub const ORGANIC_SPEEDS: [f64; 3] = [-0.02, 0.015, -0.025];

// ── Footer ──────────────────────────────────────────────────────

pub const YEAR_ID: &str = "current-year";
