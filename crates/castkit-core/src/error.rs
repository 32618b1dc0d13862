//! Error types for Castkit.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose
//! error half is [`CastkitError`]. All variants implement the standard
//! `std::error::Error` trait via `thiserror`.
//!
//! Two regimes coexist:
//! - building from an untyped [`ConfigMap`](crate::ConfigMap) reports failure
//!   as `None` and never produces a `CastkitError`;
//! - JSON document (de)serialization reports failures as `CastkitError`
//!   values, which optional fields swallow locally.
//!
//! # Example
//!
//! ```
//! use castkit_core::{CastkitError, Result};
//!
//! fn require_port(port: i64) -> Result<u16> {
//!     u16::try_from(port)
//!         .map_err(|_| CastkitError::validation_error("port", "out of range"))
//! }
//!
//! assert!(require_port(8080).is_ok());
//! assert!(require_port(-1).unwrap_err().is_validation_error());
//! ```

use thiserror::Error;

/// Main error type for Castkit operations.
#[derive(Debug, Error)]
pub enum CastkitError {
    /// The value is not in a state that can be serialized.
    #[error("Invalid {entity}: {reason}")]
    InvalidValue {
        /// Type or entity name that failed the check
        entity: String,
        /// Why it's invalid
        reason: String,
    },

    /// A required document field was absent.
    #[error("Field '{field}' not found in document")]
    FieldNotFound {
        /// The key that was requested
        field: String,
    },

    /// A document field was present but held the wrong JSON type.
    #[error("Field '{field}' has wrong type, expected {expected}")]
    TypeMismatch {
        /// The offending key
        field: String,
        /// Human readable name of the expected type
        expected: &'static str,
    },

    /// A field had the right type but an unacceptable value.
    #[error("Validation error for field '{field}': {message}")]
    ValidationError {
        /// Field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Error parsing or printing JSON/YAML text.
    #[error("Failed to parse '{source_name}': {message}")]
    ParseError {
        /// Where the text came from (or is going to)
        source_name: String,
        /// Description of the parse error
        message: String,
        /// Underlying error, if any
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CastkitError {
    // ============================================
    // Convenience constructors
    // ============================================

    /// Creates an InvalidValue error.
    ///
    /// # Example
    ///
    /// ```
    /// use castkit_core::CastkitError;
    ///
    /// let error = CastkitError::invalid_value("InputUrl", "url is not valid");
    /// assert!(error.is_invalid_value());
    /// ```
    pub fn invalid_value(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Creates a FieldNotFound error.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// Creates a TypeMismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Creates a ValidationError.
    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a ParseError without a cause.
    pub fn parse_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a ParseError with a cause.
    pub fn parse_error_with_cause<E>(
        source: impl Into<String>,
        message: impl Into<String>,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================
    // Query methods
    // ============================================

    /// Returns true if a validity gate rejected the value.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Returns true if a required field was missing.
    pub fn is_field_not_found(&self) -> bool {
        matches!(self, Self::FieldNotFound { .. })
    }

    /// Returns true if a field had the wrong type.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

/// Type alias for Results with CastkitError.
pub type Result<T> = std::result::Result<T, CastkitError>;
