//! Tender identification record

use chrono::NaiveDate;

/// Identification block for a call for tenders.
///
/// Constructed fresh for each report request and treated as immutable
/// once handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenderRecord {
    /// Free-form tender identifier, e.g. "09/2025"
    pub number: String,
    /// Announcement date (display only, no timezone semantics)
    pub date: NaiveDate,
    /// Governorate or locality issuing the call
    pub region: String,
    /// Contracting authority
    pub authority: String,
}

impl TenderRecord {
    /// Create a new tender record
    pub fn new<S1, S2, S3>(number: S1, date: NaiveDate, region: S2, authority: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            number: number.into(),
            date,
            region: region.into(),
            authority: authority.into(),
        }
    }

    /// File name for the generated report, derived from the tender number.
    ///
    /// Path-unsafe characters in the number are replaced with `-` so the
    /// name is usable on every platform ("09/2025" -> "report_09-2025.pdf").
    pub fn report_file_name(&self) -> String {
        let safe: String = self
            .number
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                c => c,
            })
            .collect();
        format!("report_{}.pdf", safe)
    }
}

impl Default for TenderRecord {
    fn default() -> Self {
        Self {
            number: "09/2025".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 1).expect("static date is valid"),
            region: "Bizerte".to_string(),
            authority: "Regional Directorate for Agricultural Development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_record() {
        let tender = TenderRecord::default();
        assert_eq!(tender.number, "09/2025");
        assert_eq!(tender.date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(tender.region, "Bizerte");
    }

    #[test]
    fn test_report_file_name_replaces_path_separators() {
        let tender = TenderRecord::default();
        let name = tender.report_file_name();
        assert_eq!(name, "report_09-2025.pdf");
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_report_file_name_sanitizes_windows_reserved_chars() {
        let tender = TenderRecord {
            number: r#"A\B:C*D"#.to_string(),
            ..TenderRecord::default()
        };
        assert_eq!(tender.report_file_name(), "report_A-B-C-D.pdf");
    }

    #[test]
    fn test_report_file_name_trims_whitespace() {
        let tender = TenderRecord {
            number: "  12/2026 ".to_string(),
            ..TenderRecord::default()
        };
        assert_eq!(tender.report_file_name(), "report_12-2026.pdf");
    }
}
