//! Page and table geometry
//!
//! Lengths are in millimeters unless noted; font sizes are in points.

use bidreport_core::HorizontalAlignment;

/// A4 portrait page width
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 portrait page height
pub const PAGE_HEIGHT: f64 = 297.0;

/// Left page margin
pub const MARGIN_LEFT: f64 = 15.0;
/// Right page margin
pub const MARGIN_RIGHT: f64 = 15.0;
/// Top page margin
pub const MARGIN_TOP: f64 = 20.0;
/// Bottom page margin
pub const MARGIN_BOTTOM: f64 = 15.0;

/// Height of one table row
pub const ROW_HEIGHT: f64 = 8.0;

/// Horizontal inset of cell text from the cell edge
pub const CELL_PADDING: f64 = 2.0;

/// Vertical space kept below the table for the footer line
pub const FOOTER_SPACE: f64 = 12.0;

/// Points to millimeters
pub const PT_TO_MM: f64 = 0.352_778;

/// Relative column widths: lot, company, bid, estimate, deviation
pub const COLUMN_WEIGHTS: [f64; 5] = [80.0, 120.0, 90.0, 90.0, 70.0];

/// Width of the printable area between the side margins
pub fn printable_width() -> f64 {
    PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

/// Absolute column widths, scaled to fill the printable width
pub fn column_widths() -> [f64; 5] {
    let total: f64 = COLUMN_WEIGHTS.iter().sum();
    COLUMN_WEIGHTS.map(|w| w / total * printable_width())
}

/// Left edge of each column plus the table's right edge
pub fn column_edges() -> [f64; 6] {
    let widths = column_widths();
    let mut edges = [MARGIN_LEFT; 6];
    for i in 0..5 {
        edges[i + 1] = edges[i] + widths[i];
    }
    edges
}

/// Approximate width of `text` at `font_size` points.
///
/// Helvetica advance widths grouped by character class; close enough to
/// position short table strings.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    let ems: f64 = text.chars().map(char_em).sum();
    ems * font_size * PT_TO_MM
}

/// X position for `text` inside a cell starting at `cell_left`
pub fn aligned_x(
    text: &str,
    font_size: f64,
    alignment: HorizontalAlignment,
    cell_left: f64,
    cell_width: f64,
) -> f64 {
    let width = text_width(text, font_size);
    match alignment {
        HorizontalAlignment::Left => cell_left + CELL_PADDING,
        HorizontalAlignment::Center => cell_left + (cell_width - width) / 2.0,
        HorizontalAlignment::Right => cell_left + cell_width - CELL_PADDING - width,
    }
}

fn char_em(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | '\'' | '|' | '!' => 0.28,
        'f' | 't' | 'r' | ' ' | '(' | ')' | '-' | '/' => 0.33,
        'm' | 'w' | 'M' | 'W' | '%' => 0.89,
        'A'..='Z' => 0.72,
        '0'..='9' | '+' => 0.56,
        _ => 0.50,
    }
}
