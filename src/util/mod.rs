//! Cross-cutting helpers: session persistence, display formatting, image
//! URL normalization, spreadsheet export, dark mode, and the admin route
//! guard.

pub mod auth;
pub mod dark_mode;
pub mod export;
pub mod format;
pub mod image_url;
pub mod session;
