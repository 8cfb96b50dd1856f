//! Inbox state: message list plus the in-memory "read" selection.
//!
//! Entries with malformed identifiers are dropped at ingest so every list
//! row can safely link to `/emails/:id`.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::types::Message;

/// Shared inbox state.
#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub items: Vec<Message>,
    pub loading: bool,
    /// Highlighted message; held only in memory, never persisted.
    pub selected_id: Option<String>,
}

impl MessagesState {
    /// Replace the collection after a fetch, dropping entries whose
    /// identifier is not a well-formed ObjectId.
    pub fn set_items(&mut self, items: Vec<Message>) {
        self.items = items.into_iter().filter(|message| is_object_id(&message.id)).collect();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

/// A 24-character hex entity identifier.
pub fn is_object_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}
