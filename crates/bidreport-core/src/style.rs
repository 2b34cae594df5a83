//! Visual style of the rendered table

use crate::error::{Error, Result};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse from a hex string (e.g., "#4472C4" or "4472C4")
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Color {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Components normalized to `0.0..=1.0`, as PDF color operators expect
    pub fn to_normalized(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Header fill of the reference report (`#4472C4`)
    pub const HEADER_BLUE: Color = Color::rgb(0x44, 0x72, 0xC4);
}

/// Horizontal alignment of cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Left aligned
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

/// Visual style of the report table.
///
/// The default matches the reference report: blue header with white
/// text, centered cells, full 0.5pt grid, 10pt body text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableStyle {
    /// Header row background
    pub header_fill: Color,
    /// Header row text color
    pub header_text: Color,
    /// Body text color
    pub text: Color,
    /// Grid line color
    pub grid: Color,
    /// Grid line width in points
    pub grid_width: f64,
    /// Cell text alignment
    pub alignment: HorizontalAlignment,
    /// Body font size in points
    pub font_size: f64,
}

impl TableStyle {
    /// Create the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header fill color
    pub fn with_header_fill(mut self, color: Color) -> Self {
        self.header_fill = color;
        self
    }

    /// Set the header text color
    pub fn with_header_text(mut self, color: Color) -> Self {
        self.header_text = color;
        self
    }

    /// Set the grid color and width
    pub fn with_grid(mut self, color: Color, width: f64) -> Self {
        self.grid = color;
        self.grid_width = width;
        self
    }

    /// Set the cell alignment
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the body font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_fill: Color::HEADER_BLUE,
            header_text: Color::WHITE,
            text: Color::BLACK,
            grid: Color::BLACK,
            grid_width: 0.5,
            alignment: HorizontalAlignment::Center,
            font_size: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#4472C4").unwrap(), Color::HEADER_BLUE);
        assert_eq!(Color::from_hex("FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("not a color").is_err());
    }

    #[test]
    fn test_to_normalized() {
        assert_eq!(Color::BLACK.to_normalized(), (0.0, 0.0, 0.0));
        assert_eq!(Color::WHITE.to_normalized(), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_default_style_matches_reference_report() {
        let style = TableStyle::default();
        assert_eq!(style.header_fill, Color::from_hex("#4472C4").unwrap());
        assert_eq!(style.header_text, Color::WHITE);
        assert_eq!(style.alignment, HorizontalAlignment::Center);
        assert_eq!(style.grid_width, 0.5);
        assert_eq!(style.font_size, 10.0);
    }
}
