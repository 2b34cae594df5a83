//! # bidreport-pdf
//!
//! PDF rendering for tender evaluation reports.
//!
//! [`ReportRenderer`] is a pure function from a tender record, a lot
//! list and a generation timestamp to a complete PDF byte sequence:
//! a centered title block, a styled table with one row per lot, and a
//! timestamp footer. Tables that outgrow a page continue on the next
//! one with the header row repeated.
//!
//! ## Example
//!
//! ```rust
//! use bidreport_core::{LotRecord, TenderRecord};
//! use bidreport_pdf::ReportRenderer;
//! use chrono::Local;
//!
//! let renderer = ReportRenderer::new();
//! let bytes = renderer
//!     .render(&TenderRecord::default(), &LotRecord::default_slots(), Local::now())
//!     .unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod layout;
pub mod options;
pub mod writer;

pub use error::{PdfError, PdfResult};
pub use options::{FontSource, RenderOptions};
pub use writer::ReportRenderer;
