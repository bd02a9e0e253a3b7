//! Shared types for the restaurant dashboard
//!
//! Data models, the unified error type and small time/id utilities used by
//! the `dashboard` crate.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
