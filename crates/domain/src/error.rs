//! Unified error types for the domain layer
//!
//! Two error families, split by what the caller can do about them:
//! [`DomainError`] for values that fail a business rule, and [`ParseError`]
//! for CSV text whose shape is wrong before any rule can even run. Batch
//! importers rely on that split to report "bad shape" and "bad value"
//! lines separately.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A required field was absent, empty, or whitespace-only
    #[error("{field} may not be empty or blank")]
    MissingValue { field: &'static str },

    /// A field had a value, but the value failed a domain rule
    #[error("{field} value {value} is invalid: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// An identity key already exists within the owning collection
    #[error("duplicate key '{key}' already exists in the collection")]
    DuplicateKey { key: String },

    /// No entry with the given identity key exists in the collection
    #[error("no entry with key '{key}' found in the collection")]
    NotFound { key: String },
}

impl DomainError {
    /// Creates a missing-value error for a required field that was
    /// absent, empty, or whitespace-only.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingValue { field }
    }

    /// Creates an invalid-value error for a field whose value failed a
    /// domain rule. The offending value is embedded in the message so
    /// callers (and tests) can substring-match it.
    pub fn invalid(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate-key error
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Create a not-found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}

/// Error type for parsing entities out of delimited text
///
/// `FieldCount` and `Malformed` describe text that has the wrong shape;
/// `Invalid` wraps a [`DomainError`] raised by a well-formed segment whose
/// value failed validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The line did not split into the expected number of fields
    #[error("expected {expected} fields, found {actual}")]
    FieldCount {
        expected: &'static str,
        actual: usize,
    },

    /// A segment could not be converted to its target type
    #[error("{field}: cannot parse '{value}'")]
    Malformed {
        field: &'static str,
        value: String,
    },

    /// A segment converted cleanly but failed domain validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl ParseError {
    /// Create a malformed-segment error
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            value: value.into(),
        }
    }

    /// Returns true when the line's shape was wrong (field count or an
    /// unconvertible segment), as opposed to a well-formed line carrying
    /// a value that failed a domain rule.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}
