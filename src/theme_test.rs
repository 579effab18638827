use super::*;

// =============================================================
// Theme parsing and formatting
// =============================================================

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn opposite_is_an_involution() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.opposite().opposite(), theme);
    }
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// Startup theme choice
// =============================================================

#[test]
fn saved_preference_wins_over_system_preference() {
    assert_eq!(choose_initial(Some(Theme::Light), true), Theme::Light);
    assert_eq!(choose_initial(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn system_dark_preference_applies_when_nothing_saved() {
    assert_eq!(choose_initial(None, true), Theme::Dark);
}

#[test]
fn light_is_the_fallback() {
    assert_eq!(choose_initial(None, false), Theme::Light);
}
