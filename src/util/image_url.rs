//! Product image URL normalization.
//!
//! Stored image paths are whatever the upload middleware produced:
//! sometimes an absolute URL, sometimes a server-relative path with
//! Windows-style backslashes. Every `<img src>` goes through [`normalize`]
//! so both shapes resolve against the same API origin.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

use crate::net::api::base_api;

/// Resolve a stored image path to a usable URL.
///
/// Paths that already carry a scheme are returned untouched; everything
/// else has backslashes flattened and is joined onto the API base.
pub fn normalize(path: &str) -> String {
    if path.trim().is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let flattened = path.replace('\\', "/");
    let trimmed = flattened.trim_start_matches('/');
    format!("{}/{trimmed}", base_api().trim_end_matches('/'))
}

/// Whether a product actually has an image stored in this slot.
pub fn has_image(path: &str) -> bool {
    !path.trim().is_empty()
}
