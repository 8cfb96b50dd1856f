use super::*;

const GOOD_ID: &str = "64f1c0ffee0ddba11ca7e511";

fn message(id: &str, name: &str) -> Message {
    Message { id: id.to_owned(), name: name.to_owned(), ..Message::default() }
}

#[test]
fn object_id_accepts_24_hex_chars() {
    assert!(is_object_id(GOOD_ID));
    assert!(is_object_id("ABCDEF0123456789abcdef01"));
}

#[test]
fn object_id_rejects_wrong_length_or_alphabet() {
    assert!(!is_object_id(""));
    assert!(!is_object_id("64f1c0ffee0ddba11ca7e51"));
    assert!(!is_object_id("64f1c0ffee0ddba11ca7e5111"));
    assert!(!is_object_id("64f1c0ffee0ddba11ca7e5zz"));
}

#[test]
fn set_items_drops_malformed_identifiers() {
    let mut state = MessagesState::default();
    state.set_items(vec![
        message(GOOD_ID, "kept"),
        message("undefined", "dropped"),
        message("", "dropped too"),
    ]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "kept");
}

#[test]
fn selection_is_tracked_by_identifier() {
    let mut state = MessagesState::default();
    assert!(!state.is_selected(GOOD_ID));
    state.selected_id = Some(GOOD_ID.to_owned());
    assert!(state.is_selected(GOOD_ID));
    assert!(!state.is_selected("64f1c0ffee0ddba11ca7e512"));
}
