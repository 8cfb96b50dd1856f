//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod message_content;
pub mod message_list;
pub mod product_form_dialog;
pub mod reply_dialog;
pub mod sidebar;
pub mod skeleton_rows;
pub mod toast_shelf;
