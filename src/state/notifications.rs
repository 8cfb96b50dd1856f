//! Toast notifications.
//!
//! Each toast carries a generated key so the shelf can dismiss one entry
//! without disturbing its neighbours, even when two toasts share the same
//! text.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

/// A single toast on the shelf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub text: String,
}

/// Shared toast shelf state.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.items.push(Notification {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text);
    }

    pub fn danger(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Danger, text);
    }

    /// Remove one toast by key. Unknown keys are a no-op; the auto-dismiss
    /// timer can fire after a manual close already removed the entry.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|notification| notification.id != id);
    }
}
