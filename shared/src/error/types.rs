//! Error type shared by every dashboard component

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Component-level errors (`CatalogError`, `ReservationError`, ...) all
/// convert into this type before they reach the shell, so the shell only has
/// to know one shape when it builds a notification.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending field, id, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// True for missing/invalid input, the only kind a user can fix in place
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::RequiredField
                | ErrorCode::ValueOutOfRange
                | ErrorCode::DishInvalidPrice
                | ErrorCode::OrderInvalidStatus
                | ErrorCode::OrderInvalidTotal
        )
    }

    // ==================== Convenience constructors ====================

    /// Create a required-field error naming the empty field
    pub fn required_field(field: &str) -> Self {
        Self::new(ErrorCode::RequiredField).with_detail("field", field)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::MenuNotFound);
        assert_eq!(err.message, "Menu not found");
        assert_eq!(err.details, None);
    }

    #[test]
    fn test_required_field_carries_field_detail() {
        let err = AppError::required_field("description");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.to_string(), "Please fill in all fields");
        let details = err.details.unwrap();
        assert_eq!(details.get("field"), Some(&Value::from("description")));
    }

    #[test]
    fn test_already_exists_message() {
        let err = AppError::already_exists("Menu 1");
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        assert_eq!(err.message, "Menu 1 already exists");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_is_validation() {
        assert!(AppError::required_field("name").is_validation());
        assert!(AppError::new(ErrorCode::DishInvalidPrice).is_validation());
        assert!(!AppError::invalid_credentials().is_validation());
    }

    #[test]
    fn test_serialize_skips_empty_details() {
        let json = serde_json::to_value(AppError::new(ErrorCode::NotAuthenticated)).unwrap();
        assert_eq!(json["code"], 1001);
        assert!(json.get("details").is_none());
    }
}
