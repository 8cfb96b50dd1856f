//! Chrome-level UI state shared across pages.

/// Shared UI state.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
