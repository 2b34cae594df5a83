//! # bidreport
//!
//! A Rust library for generating tender bid-evaluation reports.
//!
//! Bidreport collects a tender record and a list of evaluated lots,
//! computes the deviation of each bid from the administration's
//! estimate, and renders a printable PDF: title block, styled table,
//! generation-timestamp footer.
//!
//! ## Features
//!
//! - Typed records with the reference form's defaults built in
//! - Exact money arithmetic and formatting (`rust_decimal`)
//! - Configurable table style and deviation sign display
//! - Paginated PDF output with repeated table headers
//!
//! ## Example
//!
//! ```rust
//! use bidreport::prelude::*;
//! use chrono::Local;
//!
//! let tender = TenderRecord::default();
//! let lots = LotRecord::default_slots();
//!
//! let bytes = ReportRenderer::new()
//!     .render(&tender, &lots, Local::now())
//!     .unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//!
//! // Save under a name derived from the tender number:
//! // std::fs::write(tender.report_file_name(), bytes).unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use bidreport_core::{
    parse_amount, Color, Error, HorizontalAlignment, LotRecord, NumberFormat, ReportTable, Result,
    SignDisplay, TableStyle, TenderRecord, COLUMNS, REPORT_MIME, REPORT_TITLE,
};

// Re-export rendering types
pub use bidreport_pdf::{FontSource, PdfError, PdfResult, RenderOptions, ReportRenderer};
