#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn stored_choice_overrides_the_system_scheme() {
    assert!(resolve(Some(true), false));
    assert!(!resolve(Some(false), true));
}

#[test]
fn without_a_stored_choice_the_system_scheme_decides() {
    assert!(resolve(None, true));
    assert!(!resolve(None, false));
}

#[test]
fn host_reads_default_to_light() {
    // No storage and no media query outside the browser.
    assert_eq!(stored_preference(), None);
    assert!(!system_prefers_dark());
    assert!(!read_preference());
}

#[test]
fn toggle_returns_the_flipped_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
