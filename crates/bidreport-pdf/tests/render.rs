//! End-to-end render checks: every supported shape of input must come
//! back as a complete PDF byte sequence, never a partial file.

use bidreport_core::{LotRecord, SignDisplay, TenderRecord};
use bidreport_pdf::{FontSource, PdfError, RenderOptions, ReportRenderer};
use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;

fn fixed_timestamp() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 9, 1, 10, 30, 0).unwrap()
}

#[test]
fn renders_default_report() {
    let bytes = ReportRenderer::new()
        .render(
            &TenderRecord::default(),
            &LotRecord::default_slots(),
            fixed_timestamp(),
        )
        .unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn renders_empty_lot_list() {
    let bytes = ReportRenderer::new()
        .render(&TenderRecord::default(), &[], fixed_timestamp())
        .unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn long_lot_list_spills_onto_further_pages() {
    let lots: Vec<LotRecord> = (1..=80)
        .map(|i| {
            LotRecord::new(
                format!("Lot {i}"),
                "CAP BON EMIHEM",
                Decimal::new(45_101_000, 3),
                Decimal::new(52_645_600, 3),
            )
        })
        .collect();

    let renderer = ReportRenderer::new();
    let long = renderer
        .render(&TenderRecord::default(), &lots, fixed_timestamp())
        .unwrap();
    let short = renderer
        .render(&TenderRecord::default(), &lots[..3], fixed_timestamp())
        .unwrap();

    assert!(long.starts_with(b"%PDF"));
    assert!(long.len() > short.len());
}

#[test]
fn render_to_file_writes_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TenderRecord::default().report_file_name());

    ReportRenderer::new()
        .render_to_file(
            &TenderRecord::default(),
            &LotRecord::default_slots(),
            fixed_timestamp(),
            &path,
        )
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn unsigned_option_still_renders() {
    let options = RenderOptions::default().with_sign(SignDisplay::Negative);
    let bytes = ReportRenderer::with_options(options)
        .render(
            &TenderRecord::default(),
            &LotRecord::default_slots(),
            fixed_timestamp(),
        )
        .unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn missing_font_file_is_a_font_error() {
    let options =
        RenderOptions::default().with_font(FontSource::File("no/such/font.ttf".into()));
    let err = ReportRenderer::with_options(options)
        .render(
            &TenderRecord::default(),
            &LotRecord::default_slots(),
            fixed_timestamp(),
        )
        .unwrap_err();

    assert!(matches!(err, PdfError::Font(_)));
}
