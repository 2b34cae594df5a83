//! # bidreport-core
//!
//! Core data structures for the bidreport tender report generator.
//!
//! This crate provides the types shared by the renderer and the CLI:
//! - [`TenderRecord`] - Identification block for a call for tenders
//! - [`LotRecord`] - One evaluated lot (estimate vs. winning bid)
//! - [`ReportTable`] - Fully formatted table content for a lot list
//! - [`NumberFormat`] and [`SignDisplay`] - Column display formats
//! - [`TableStyle`] and [`Color`] - Visual style of the rendered table
//!
//! ## Example
//!
//! ```rust
//! use bidreport_core::{LotRecord, ReportTable, SignDisplay, TenderRecord};
//!
//! let tender = TenderRecord::default();
//! let lots = LotRecord::default_slots();
//!
//! let table = ReportTable::build(&lots, SignDisplay::Always);
//! assert_eq!(table.rows.len(), lots.len() + 1);
//! assert_eq!(tender.report_file_name(), "report_09-2025.pdf");
//! ```

pub mod error;
pub mod format;
pub mod lot;
pub mod style;
pub mod table;
pub mod tender;

// Re-exports for convenience
pub use error::{Error, Result};
pub use format::{parse_amount, NumberFormat, SignDisplay};
pub use lot::LotRecord;
pub use style::{Color, HorizontalAlignment, TableStyle};
pub use table::{ReportTable, COLUMNS};
pub use tender::TenderRecord;

/// Fixed title of the generated report
pub const REPORT_TITLE: &str = "Bid Evaluation Report";

/// MIME type of the generated document
pub const REPORT_MIME: &str = "application/pdf";
