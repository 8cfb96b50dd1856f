//! User list state with live client-side search.
//!
//! Unlike products, the user search re-derives on every keystroke, so the
//! filtered view is computed on demand instead of being stored.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::User;

/// Shared user list state.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub search: String,
}

impl UsersState {
    /// The rows currently visible for the search box contents.
    pub fn filtered(&self) -> Vec<User> {
        filter_users(&self.items, &self.search)
    }
}

/// Case-insensitive substring match on name and email, plus a
/// punctuation-insensitive match on the phone number so queries like
/// `555-1234` still hit `5551234567`.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let lowered = query.to_lowercase();
    let digits = alphanumeric(query);
    users
        .iter()
        .filter(|user| {
            user.first_name.to_lowercase().contains(&lowered)
                || user.last_name.to_lowercase().contains(&lowered)
                || user.email.to_lowercase().contains(&lowered)
                || alphanumeric(&user.number).contains(&digits)
        })
        .cloned()
        .collect()
}

fn alphanumeric(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
