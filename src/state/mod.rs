//! Shared application state provided as Leptos contexts.
//!
//! DESIGN
//! ======
//! One plain struct per concern, provided as an `RwSignal` from the app
//! root. List states keep the full fetched collection separate from the
//! derived filtered copy so filters re-derive client-side without another
//! server round-trip.

pub mod auth;
pub mod messages;
pub mod notifications;
pub mod product_form;
pub mod products;
pub mod ui;
pub mod users;
