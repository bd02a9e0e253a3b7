//! Data models
//!
//! Plain data shared by the dashboard components. Nothing here owns state or
//! enforces invariants across a collection; the list managers do that.

pub mod dish;
pub mod menu;
pub mod order;
pub mod reservation;

// Re-exports
pub use dish::*;
pub use menu::*;
pub use order::*;
pub use reservation::*;
