//! Session state for the signed-in staff member.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root and consulted by the route guard on every
//! guarded render. Restored from localStorage with a typed decode; a
//! malformed stored session simply leaves `user` unset (logged out).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// The only role allowed through the dashboard guard.
pub const ADMIN_ROLE: &str = "admin";

/// Current session: the authenticated account, its opaque API token, and
/// whether the persisted session is still being restored.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading starts true so guards hold their redirect until the
        // persisted session has been read.
        Self { user: None, token: None, loading: true }
    }
}

impl SessionState {
    /// Whether the restored session belongs to an admin account.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == ADMIN_ROLE)
    }
}
