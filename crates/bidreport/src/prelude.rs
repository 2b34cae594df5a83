//! Prelude module - common imports for bidreport users
//!
//! ```rust
//! use bidreport::prelude::*;
//! ```

pub use crate::{
    // Style types
    Color,
    // Error types
    Error,
    FontSource,
    HorizontalAlignment,
    // Core records
    LotRecord,
    // Formatting
    parse_amount,
    NumberFormat,
    PdfError,
    PdfResult,
    // Rendering
    RenderOptions,
    ReportRenderer,
    ReportTable,
    Result,
    SignDisplay,
    TableStyle,
    TenderRecord,
};
