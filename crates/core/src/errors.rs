//! Core error types for the advisor CRM.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures (lock poisoning, serialization, missing records) are converted
//! to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::commission::CommissionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the advisor application.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Commission engine error: {0}")]
    Commission(#[from] CommissionError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A lock guarding shared state was poisoned by a panicking writer.
    #[error("State lock poisoned: {0}")]
    LockPoisoned(String),

    /// Persisted data could not be serialized or deserialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
