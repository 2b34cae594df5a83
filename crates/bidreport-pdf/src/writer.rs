//! Report document writer

use std::fs::File;
use std::path::Path;

use bidreport_core::{Color, LotRecord, ReportTable, TenderRecord, REPORT_TITLE};
use chrono::{DateTime, Local};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rect, Rgb,
};

use crate::error::{PdfError, PdfResult};
use crate::layout::{
    aligned_x, column_edges, column_widths, text_width, CELL_PADDING, FOOTER_SPACE, MARGIN_BOTTOM,
    MARGIN_RIGHT, MARGIN_TOP, PAGE_HEIGHT, PAGE_WIDTH, PT_TO_MM, ROW_HEIGHT,
};
use crate::options::{FontSource, RenderOptions};

const LAYER_NAME: &str = "Layer 1";
const TITLE_SIZE: f64 = 14.0;

/// Report PDF renderer.
///
/// Stateless apart from its options: rendering is a pure function of
/// the tender record, the lot list and the supplied timestamp.
pub struct ReportRenderer {
    options: RenderOptions,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Current layer and the y position the next element is drawn below.
struct Cursor {
    layer: PdfLayerReference,
    y: f64,
}

impl ReportRenderer {
    /// Create a renderer with the default options
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a renderer with explicit options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the report to PDF bytes.
    ///
    /// `generated_at` is embedded in the footer; passing it in keeps the
    /// output a function of its arguments.
    pub fn render(
        &self,
        tender: &TenderRecord,
        lots: &[LotRecord],
        generated_at: DateTime<Local>,
    ) -> PdfResult<Vec<u8>> {
        let table = ReportTable::build(lots, self.options.sign);

        let (doc, page, layer) =
            PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), LAYER_NAME);
        let fonts = self.load_fonts(&doc)?;
        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - MARGIN_TOP,
        };

        self.draw_title(&mut cursor, tender, &fonts);
        self.draw_table(&doc, &mut cursor, &table, &fonts);
        self.draw_footer(&doc, &mut cursor, generated_at, &fonts);

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| PdfError::Render(e.to_string()))?;
        log::debug!("rendered {} lot(s) into {} bytes", lots.len(), bytes.len());
        Ok(bytes)
    }

    /// Render the report and write it to `path`.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        tender: &TenderRecord,
        lots: &[LotRecord],
        generated_at: DateTime<Local>,
        path: P,
    ) -> PdfResult<()> {
        let bytes = self.render(tender, lots, generated_at)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn load_fonts(&self, doc: &PdfDocumentReference) -> PdfResult<Fonts> {
        match &self.options.font {
            FontSource::Builtin => {
                let regular = doc
                    .add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(|e| PdfError::Font(e.to_string()))?;
                let bold = doc
                    .add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(|e| PdfError::Font(e.to_string()))?;
                Ok(Fonts { regular, bold })
            }
            FontSource::File(path) => {
                let file = File::open(path)
                    .map_err(|e| PdfError::Font(format!("{}: {}", path.display(), e)))?;
                let font = doc
                    .add_external_font(file)
                    .map_err(|e| PdfError::Font(format!("{}: {}", path.display(), e)))?;
                Ok(Fonts {
                    regular: font.clone(),
                    bold: font,
                })
            }
        }
    }

    fn draw_title(&self, cursor: &mut Cursor, tender: &TenderRecord, fonts: &Fonts) {
        self.set_fill(&cursor.layer, self.options.style.text);
        let lines = [
            REPORT_TITLE.to_string(),
            format!(
                "Call for tenders No. {} - {}",
                tender.number,
                tender.date.format("%Y/%m/%d")
            ),
        ];
        for line in lines {
            cursor.y -= TITLE_SIZE * PT_TO_MM * 1.2;
            let x = (PAGE_WIDTH - text_width(&line, TITLE_SIZE)) / 2.0;
            cursor
                .layer
                .use_text(line, TITLE_SIZE as f32, Mm(x as f32), Mm(cursor.y as f32), &fonts.bold);
        }
        // spacer between the title block and the table
        cursor.y -= 12.0 * PT_TO_MM;
    }

    fn draw_table(
        &self,
        doc: &PdfDocumentReference,
        cursor: &mut Cursor,
        table: &ReportTable,
        fonts: &Fonts,
    ) {
        self.draw_row(cursor, table.header(), true, fonts);
        for row in table.body() {
            if cursor.y - ROW_HEIGHT < MARGIN_BOTTOM + FOOTER_SPACE {
                self.start_page(doc, cursor);
                self.draw_row(cursor, table.header(), true, fonts);
            }
            self.draw_row(cursor, row, false, fonts);
        }
    }

    fn draw_row(&self, cursor: &mut Cursor, cells: &[String; 5], header: bool, fonts: &Fonts) {
        let style = &self.options.style;
        let edges = column_edges();
        let widths = column_widths();
        let top = cursor.y;
        let bottom = top - ROW_HEIGHT;

        if header {
            self.set_fill(&cursor.layer, style.header_fill);
            cursor.layer.add_rect(
                Rect::new(Mm(edges[0] as f32), Mm(bottom as f32), Mm(edges[5] as f32), Mm(top as f32))
                    .with_mode(PaintMode::Fill),
            );
        }

        // full grid: row outline plus the inner column rules
        let (r, g, b) = style.grid.to_normalized();
        cursor
            .layer
            .set_outline_color(PdfColor::Rgb(Rgb::new(r as f32, g as f32, b as f32, None)));
        cursor.layer.set_outline_thickness(style.grid_width as f32);
        cursor.layer.add_line(horizontal_line(edges[0], edges[5], top));
        cursor
            .layer
            .add_line(horizontal_line(edges[0], edges[5], bottom));
        for x in edges {
            cursor.layer.add_line(vertical_line(x, bottom, top));
        }

        self.set_fill(&cursor.layer, if header { style.header_text } else { style.text });
        let font = if header { &fonts.bold } else { &fonts.regular };
        // baseline sits a little above the cell bottom so descenders stay inside
        let baseline = bottom + (ROW_HEIGHT - style.font_size * PT_TO_MM) / 2.0 + 0.6;
        for (i, cell) in cells.iter().enumerate() {
            let x = aligned_x(cell, style.font_size, style.alignment, edges[i], widths[i]);
            cursor
                .layer
                .use_text(cell.clone(), style.font_size as f32, Mm(x as f32), Mm(baseline as f32), font);
        }

        cursor.y = bottom;
    }

    fn draw_footer(
        &self,
        doc: &PdfDocumentReference,
        cursor: &mut Cursor,
        generated_at: DateTime<Local>,
        fonts: &Fonts,
    ) {
        let style = &self.options.style;
        // spacer between the table and the footer line
        cursor.y -= 20.0 * PT_TO_MM;
        if cursor.y - style.font_size * PT_TO_MM < MARGIN_BOTTOM {
            self.start_page(doc, cursor);
        }

        let text = format!("Generated: {}", generated_at.format("%Y/%m/%d %H:%M"));
        self.set_fill(&cursor.layer, style.text);
        cursor.y -= style.font_size * PT_TO_MM;
        let x = PAGE_WIDTH - MARGIN_RIGHT - CELL_PADDING - text_width(&text, style.font_size);
        cursor
            .layer
            .use_text(text, style.font_size as f32, Mm(x as f32), Mm(cursor.y as f32), &fonts.regular);
    }

    fn start_page(&self, doc: &PdfDocumentReference, cursor: &mut Cursor) {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), LAYER_NAME);
        cursor.layer = doc.get_page(page).get_layer(layer);
        cursor.y = PAGE_HEIGHT - MARGIN_TOP;
        log::debug!("content overflow, continuing on a new page");
    }

    fn set_fill(&self, layer: &PdfLayerReference, color: Color) {
        let (r, g, b) = color.to_normalized();
        layer.set_fill_color(PdfColor::Rgb(Rgb::new(r as f32, g as f32, b as f32, None)));
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn horizontal_line(x1: f64, x2: f64, y: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x1 as f32), Mm(y as f32)), false),
            (Point::new(Mm(x2 as f32), Mm(y as f32)), false),
        ],
        is_closed: false,
    }
}

fn vertical_line(x: f64, y1: f64, y2: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x as f32), Mm(y1 as f32)), false),
            (Point::new(Mm(x as f32), Mm(y2 as f32)), false),
        ],
        is_closed: false,
    }
}
