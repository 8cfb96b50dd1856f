//! The product form model shared by the add and edit dialogs.
//!
//! Both dialogs bind the same fields and run the same validation; edit
//! additionally seeds the form from an existing product so unchanged
//! fields round-trip untouched.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::types::Product;

/// Editable product fields, held as the user typed them.
///
/// Numeric fields stay `Option` until the input parses so a half-typed
/// value never silently becomes zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub quantity: Option<f64>,
    pub description: String,
    pub category: String,
}

impl ProductForm {
    /// Seed the form from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: Some(product.price),
            discount: Some(product.discount),
            quantity: Some(product.quantity),
            description: product.description.clone(),
            category: product.kind.clone(),
        }
    }

    /// First validation failure, or `None` when the form can be submitted.
    pub fn validate(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("Title is required");
        }
        match self.price {
            None => return Some("Price is required"),
            Some(price) if price <= 0.0 => return Some("Price must be greater than zero"),
            Some(_) => {}
        }
        match self.discount {
            None => return Some("Discount is required"),
            Some(discount) if discount < 0.0 => return Some("Discount cannot be negative"),
            Some(_) => {}
        }
        match self.quantity {
            None => return Some("Quantity is required"),
            Some(quantity) if quantity <= 0.0 => return Some("Quantity must be greater than zero"),
            Some(_) => {}
        }
        if self.description.trim().is_empty() {
            return Some("Description is required");
        }
        if self.category.trim().is_empty() {
            return Some("Category is required");
        }
        None
    }

    /// The text fields of the multipart payload, in wire order.
    pub fn field_pairs(&self) -> [(&'static str, String); 6] {
        [
            ("title", self.title.clone()),
            ("price", number_field(self.price)),
            ("description", self.description.clone()),
            ("discount", number_field(self.discount)),
            ("quantity", number_field(self.quantity)),
            ("type", self.category.clone()),
        ]
    }
}

/// Parse a numeric input's current text; empty and junk both map to `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

fn number_field(value: Option<f64>) -> String {
    value.map(crate::util::format::plain_number).unwrap_or_default()
}
