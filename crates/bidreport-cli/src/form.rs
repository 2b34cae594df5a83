//! Form file model: the on-disk JSON shape fed to `generate`

use bidreport::{LotRecord, TenderRecord};
use serde::{Deserialize, Serialize};

/// Editable report form.
///
/// Missing pieces fall back to the documented defaults, so an empty
/// `{}` form is valid and reproduces the reference report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportForm {
    /// Tender identification block
    #[serde(default)]
    pub tender: TenderRecord,
    /// Evaluated lots, in report order
    #[serde(default = "LotRecord::default_slots")]
    pub lots: Vec<LotRecord>,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            tender: TenderRecord::default(),
            lots: LotRecord::default_slots(),
        }
    }
}
