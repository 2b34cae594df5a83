//! Assembly of the report table content
//!
//! [`ReportTable`] turns a lot list into the exact strings that appear in
//! the rendered document, so row content and ordering can be checked
//! without parsing PDF bytes.

use crate::format::{NumberFormat, SignDisplay};
use crate::lot::LotRecord;

/// Column headers, in display order
pub const COLUMNS: [&str; 5] = ["Lot", "Company", "Bid", "Estimate", "Deviation %"];

/// Fully formatted table content: the header row plus one row per lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    /// All rows, header first; lot rows keep input order
    pub rows: Vec<[String; 5]>,
}

impl ReportTable {
    /// Build the table for `lots`, preserving input order.
    ///
    /// An empty lot list produces a header-only table.
    pub fn build(lots: &[LotRecord], sign: SignDisplay) -> Self {
        let money = NumberFormat::money();
        let percent = NumberFormat::percent(sign);

        let mut rows = Vec::with_capacity(lots.len() + 1);
        rows.push(COLUMNS.map(String::from));
        for lot in lots {
            rows.push([
                lot.name.clone(),
                lot.company.clone(),
                money.format(lot.bid),
                money.format(lot.estimate),
                format!("{}%", percent.format(lot.deviation_percent())),
            ]);
        }

        ReportTable { rows }
    }

    /// The header row
    pub fn header(&self) -> &[String; 5] {
        &self.rows[0]
    }

    /// The lot rows, header excluded
    pub fn body(&self) -> &[[String; 5]] {
        &self.rows[1..]
    }
}
