//! Input validation helpers
//!
//! Centralized text length constants and field checks shared by the dish and
//! reservation forms. A required field is "missing" when it is empty after
//! trimming, which is what the add/edit dialogs treat as an unfilled input.

use shared::{AppError, ErrorCode};
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: dish, menu, guest name
pub const MAX_NAME_LEN: usize = 200;

/// Dish descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, table number
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// A single form field failed its check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} must not be empty")]
    Missing(&'static str),

    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) => field,
            Self::TooLong { field, .. } => field,
        }
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        match &err {
            FieldError::Missing(field) => AppError::required_field(field),
            FieldError::TooLong { field, max, .. } => {
                AppError::with_message(ErrorCode::ValueOutOfRange, err.to_string())
                    .with_detail("field", *field)
                    .with_detail("max", *max)
            }
        }
    }
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Missing(field));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &'static str,
    max_len: usize,
) -> Result<(), FieldError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

fn check_len(value: &str, field: &'static str, max_len: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(FieldError::TooLong {
            field,
            len,
            max: max_len,
        });
    }
    Ok(())
}
