use super::*;

fn user(first: &str, last: &str, email: &str, number: &str) -> User {
    User {
        id: format!("id-{first}"),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        number: number.to_owned(),
        ..User::default()
    }
}

fn sample() -> Vec<User> {
    vec![
        user("jane", "doe", "j@x.com", "5551234567"),
        user("Sam", "Smith", "sam@shop.com", "555-987-6543"),
        user("ana", "Berg", "ana.berg@mail.io", "04412345678"),
    ]
}

#[test]
fn empty_query_returns_all_users() {
    assert_eq!(filter_users(&sample(), "").len(), 3);
}

#[test]
fn query_matches_first_and_last_name_case_insensitively() {
    let hits = filter_users(&sample(), "JANE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "jane");

    let hits = filter_users(&sample(), "smith");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "Sam");
}

#[test]
fn query_matches_email_substring() {
    let hits = filter_users(&sample(), "berg@mail");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "ana");
}

#[test]
fn phone_query_ignores_punctuation_on_both_sides() {
    // Stored with dashes, queried without.
    let hits = filter_users(&sample(), "5559876");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "Sam");

    // Stored without dashes, queried with.
    let hits = filter_users(&sample(), "555-1234");
    assert!(hits.iter().any(|u| u.first_name == "jane"));
}

#[test]
fn unmatched_query_returns_empty() {
    assert!(filter_users(&sample(), "zzz@nowhere").is_empty());
}

#[test]
fn state_filtered_uses_current_search() {
    let mut state = UsersState { items: sample(), ..UsersState::default() };
    state.search = "ana".to_owned();
    let hits = state.filtered();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "ana");
}
