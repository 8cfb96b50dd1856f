//! Product list state with client-side filtering.
//!
//! DESIGN
//! ======
//! `items` is the last full fetch; `filtered` is re-derived from it when the
//! user applies filters. Deletes never splice locally — the list is
//! re-fetched so the server stays the source of truth.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::Product;

/// Category options offered by the add/edit form and the list filter.
pub const CATEGORIES: [&str; 8] =
    ["bed", "cabinet", "chair", "desk", "drawer", "sofa", "table", "wardrobes"];

/// Price bands offered by the list filter, encoded as `"min-max"`.
pub const PRICE_RANGES: [&str; 4] = ["0-100", "101-500", "501-1000", "1001-5000"];

/// Shared product list state.
#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub filtered: Vec<Product>,
    pub loading: bool,
    pub search: String,
    pub category: String,
    pub price_filter: String,
}

impl ProductsState {
    /// Replace the collection after a fetch. The filtered copy resets to the
    /// full collection; filter controls keep their values but are not
    /// re-applied until the user asks.
    pub fn set_items(&mut self, items: Vec<Product>) {
        self.items = items;
        self.filtered = self.items.clone();
    }

    /// Re-derive `filtered` from the full collection using the current
    /// search text, category, and price band.
    pub fn apply_filters(&mut self) {
        let mut filtered = self.items.clone();

        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            filtered.retain(|product| product.title.to_lowercase().contains(&search));
        }

        if !self.category.is_empty() {
            filtered.retain(|product| product.kind == self.category);
        }

        if let Some((min, max)) = parse_price_range(&self.price_filter) {
            filtered.retain(|product| product.price >= min && product.price <= max);
        }

        self.filtered = filtered;
    }

    /// Clear all filter controls and restore the unfiltered collection.
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.category.clear();
        self.price_filter.clear();
        self.filtered = self.items.clone();
    }
}

/// Parse a `"min-max"` price band into inclusive bounds.
pub fn parse_price_range(raw: &str) -> Option<(f64, f64)> {
    let (min, max) = raw.split_once('-')?;
    let min: f64 = min.trim().parse().ok()?;
    let max: f64 = max.trim().parse().ok()?;
    Some((min, max))
}
