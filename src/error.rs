//! Custom error types for rentcalc
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for rentcalc operations
#[derive(Error, Debug)]
pub enum RentError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// A charge field could not be parsed as a number
    #[error("Invalid amount for {category}: {value:?}")]
    InvalidAmount { category: &'static str, value: String },

    /// A charge field parsed to a negative number
    #[error("Negative amount for {category}: {value}")]
    NegativeAmount { category: &'static str, value: String },

    /// PDF rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

impl RentError {
    /// Create an "invalid amount" error for a charge category
    pub fn invalid_amount(category: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            category,
            value: value.into(),
        }
    }

    /// Create a "negative amount" error for a charge category
    pub fn negative_amount(category: &'static str, value: impl Into<String>) -> Self {
        Self::NegativeAmount {
            category,
            value: value.into(),
        }
    }

    /// Check if this error blocks a total update (any per-field rejection)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount { .. } | Self::NegativeAmount { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for rentcalc operations
pub type RentResult<T> = Result<T, RentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RentError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = RentError::invalid_amount("Rent", "abc");
        assert_eq!(err.to_string(), "Invalid amount for Rent: \"abc\"");
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_amount_error() {
        let err = RentError::negative_amount("TV/Internet", "-60");
        assert_eq!(err.to_string(), "Negative amount for TV/Internet: -60");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rent_err: RentError = io_err.into();
        assert!(matches!(rent_err, RentError::Io(_)));
        assert!(!rent_err.is_validation());
    }
}
