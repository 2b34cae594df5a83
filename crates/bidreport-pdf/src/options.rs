//! Rendering options

use std::path::PathBuf;

use bidreport_core::{SignDisplay, TableStyle};

/// Where the report font comes from.
#[derive(Debug, Clone, Default)]
pub enum FontSource {
    /// Built-in Helvetica (regular and bold), no external assets
    #[default]
    Builtin,
    /// External TrueType font file, used for all text
    File(PathBuf),
}

/// Options for [`ReportRenderer`](crate::ReportRenderer).
///
/// The default reproduces the reference report: blue header table,
/// centered cells, explicit sign on the deviation column, built-in
/// Helvetica.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Table style (colors, grid, alignment, font size)
    pub style: TableStyle,
    /// Sign policy for the deviation column
    pub sign: SignDisplay,
    /// Font source
    pub font: FontSource,
}

impl RenderOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table style
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the deviation sign policy
    pub fn with_sign(mut self, sign: SignDisplay) -> Self {
        self.sign = sign;
        self
    }

    /// Set the font source
    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: TableStyle::default(),
            sign: SignDisplay::Always,
            font: FontSource::default(),
        }
    }
}
