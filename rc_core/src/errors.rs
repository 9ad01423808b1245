//! # Error Types
//!
//! Structured error types for rc_core. Errors are raised only for input the
//! design code does not model (concrete above C90, polygonal sections) or for
//! malformed input. A section that is simply too small for its loads is not an
//! error: the solver reports it as an invalid [`DesignResult`].
//!
//! [`DesignResult`]: crate::calculations::uls::DesignResult
//!
//! ## Example
//!
//! ```rust
//! use rc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_cm: f64) -> CalcResult<()> {
//!     if width_cm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width",
//!             width_cm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is malformed (non-positive dimension, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An input value lies outside the range the design code defines
    #[error("Out of range for '{field}': {value} - {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// The requested feature (e.g. a polygonal section) is not supported
    #[error("Not implemented: {feature}")]
    NotImplemented { feature: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotImplemented error
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        CalcError::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Inputs outside the modeled scope. These need different input, not a retry.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CalcError::OutOfRange { .. } | CalcError::NotImplemented { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
