//! Error types for bidreport-core

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bidreport-core
#[derive(Debug, Error)]
pub enum Error {
    /// Numeric field failed to parse
    #[error("Invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: String, value: String },

    /// Negative amount in a money field
    #[error("Negative amount for {field}: {value}")]
    NegativeAmount { field: String, value: Decimal },

    /// Invalid color specification
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
