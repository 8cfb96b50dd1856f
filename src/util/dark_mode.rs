//! Theme preference for the dashboard chrome.
//!
//! The sidebar and login-page toggles call [`toggle`]; the app root calls
//! [`read_preference`] + [`apply`] once on mount so guarded pages render
//! with the right scheme immediately. An explicit choice is persisted in
//! `localStorage`; without one the OS color scheme decides. SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "furnimall_admin_dark";

/// The effective dark-mode setting for this browser.
pub fn read_preference() -> bool {
    resolve(stored_preference(), system_prefers_dark())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, persist the choice, and return the new value
/// for the caller's `UiState`.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}

/// An explicit stored choice always wins; otherwise follow the OS scheme.
fn resolve(stored: Option<bool>, system_dark: bool) -> bool {
    stored.unwrap_or(system_dark)
}

fn stored_preference() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        Some(raw == "true")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn persist(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
