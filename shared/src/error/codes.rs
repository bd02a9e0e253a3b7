//! Unified error codes for the dashboard
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Menu and dish errors
//! - 7xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire so that any front end can switch on
/// the number without knowing the Rust names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,

    // ==================== 4xxx: Order ====================
    /// Unknown status filter value
    OrderInvalidStatus = 4008,
    /// Order total is negative
    OrderInvalidTotal = 4009,

    // ==================== 6xxx: Menu ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish has invalid price
    DishInvalidPrice = 6002,
    /// Menu not found
    MenuNotFound = 6101,

    // ==================== 7xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric value of this code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Please fill in all fields",
            Self::ValueOutOfRange => "Value out of range",

            Self::NotAuthenticated => "Please sign in first",
            Self::InvalidCredentials => "Invalid email or password",

            Self::OrderInvalidStatus => "Invalid order status",
            Self::OrderInvalidTotal => "Order total must not be negative",

            Self::DishNotFound => "Dish not found",
            Self::DishInvalidPrice => "Dish price is invalid",
            Self::MenuNotFound => "Menu not found",

            Self::ReservationNotFound => "Reservation not found",

            Self::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            4008 => Self::OrderInvalidStatus,
            4009 => Self::OrderInvalidTotal,
            6001 => Self::DishNotFound,
            6002 => Self::DishInvalidPrice,
            6101 => Self::MenuNotFound,
            7001 => Self::ReservationNotFound,
            9001 => Self::InternalError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

/// Error returned when a u16 does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::DishNotFound.code(), 6001);
        assert_eq!(ErrorCode::MenuNotFound.code(), 6101);
        assert_eq!(ErrorCode::ReservationNotFound.code(), 7001);
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::MenuNotFound).unwrap();
        assert_eq!(json, "6101");

        let code: ErrorCode = serde_json::from_str("7001").unwrap();
        assert_eq!(code, ErrorCode::ReservationNotFound);

        assert!(serde_json::from_str::<ErrorCode>("6").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::RequiredField.to_string(), "E0007");
        assert_eq!(ErrorCode::DishInvalidPrice.to_string(), "E6002");
    }

    #[test]
    fn test_required_field_message_matches_form_prompt() {
        assert_eq!(ErrorCode::RequiredField.message(), "Please fill in all fields");
    }
}
