use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggling_twice_returns_to_the_original_state() {
    let closed = MenuState::default();
    assert!(closed.toggled().open);
    assert_eq!(closed.toggled().toggled(), closed);

    let open = MenuState { open: true };
    assert_eq!(open.toggled().toggled(), open);
}

#[test]
fn link_activation_closes_an_open_menu() {
    let open = MenuState { open: true };
    assert!(!open.after_link_activation().open);
}

#[test]
fn link_activation_leaves_a_closed_menu_closed() {
    let closed = MenuState::default();
    assert_eq!(closed.after_link_activation(), closed);
}
