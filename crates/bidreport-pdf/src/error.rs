//! PDF rendering error types

use thiserror::Error;

/// Result type for PDF rendering operations
pub type PdfResult<T> = std::result::Result<T, PdfError>;

/// Errors that can occur while producing the report document
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Font resource could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// Document serialization failed
    #[error("Render error: {0}")]
    Render(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] bidreport_core::Error),
}
