//! Networking modules for the REST API collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema mirrored
//! from API responses, and `error` is the shared failure taxonomy surfaced
//! to pages as toasts or inline text.

pub mod api;
pub mod error;
pub mod types;
