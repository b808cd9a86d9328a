//! Core error types for the lot book.
//!
//! This module defines store-agnostic error types. Storage- and
//! provider-specific errors (database drivers, HTTP clients) are converted
//! to these types by the surrounding application.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::activities::ActivityError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the lot book core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Activity error: {0}")]
    Activity(#[from] ActivityError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Market data operation failed: {0}")]
    MarketData(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert its own errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to establish a store connection.
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// A store query failed to execute.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A store transaction failed.
    #[error("Store transaction failed: {0}")]
    TransactionFailed(String),
}

/// Errors that occur during lot or indicator calculations.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid activity data: {0}")]
    InvalidActivity(String),

    #[error("Lot not found during operation: lot id {lot_id}")]
    LotNotFound { lot_id: String },

    #[error("Unsupported transaction type: {0}")]
    UnsupportedTransactionType(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input and data parsing.
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
