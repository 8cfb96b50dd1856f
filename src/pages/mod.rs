//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetch latches,
//! navigation) and delegates rendering details to `components`.

pub mod inbox;
pub mod login;
pub mod product_detail;
pub mod products_list;
pub mod user_detail;
pub mod users_list;
