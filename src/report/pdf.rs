//! PDF rendering for settlement reports
//!
//! Renders a built `Report` onto a single A4 page using the printpdf builtin
//! Helvetica fonts and returns the document as in-memory bytes. Layout: date
//! and address top-right, centered bold title, a two-column Category/Value
//! table, and an emphasized total line after the last row.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::{RentError, RentResult};

use super::Report;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN_LEFT: f32 = 20.0;
const MARGIN_RIGHT: f32 = 190.0;
const VALUE_COLUMN_X: f32 = 130.0;
const ROW_STEP: f32 = 9.0;

fn push_line(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    x: f32,
    y: f32,
) {
    layer.use_text(text, font_size, Mm(x), Mm(y), font);
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(printpdf::Line {
        points: vec![
            (printpdf::Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
            (printpdf::Point::new(Mm(MARGIN_RIGHT), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Render a report to PDF bytes
pub fn render(report: &Report) -> RentResult<Vec<u8>> {
    let (doc, page1, layer1) = PdfDocument::new(
        super::REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RentError::Render(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RentError::Render(e.to_string()))?;

    // Header: date and address (right side)
    push_line(&layer, &font, &report.formatted_date(), 12.0, 150.0, 285.0);
    push_line(&layer, &font, report.display_address(), 12.0, 150.0, 279.0);

    // Title (centered)
    push_line(&layer, &font_bold, super::REPORT_TITLE, 16.0, 85.0, 265.0);

    // Table header
    let mut y: f32 = 245.0;
    push_line(&layer, &font_bold, "Category", 12.0, MARGIN_LEFT, y);
    push_line(&layer, &font_bold, "Value", 12.0, VALUE_COLUMN_X, y);
    y -= 3.0;
    rule(&layer, y);
    y -= ROW_STEP;

    // Six body rows in canonical order
    for row in &report.rows {
        push_line(&layer, &font, row.label, 11.0, MARGIN_LEFT, y);
        push_line(&layer, &font, &row.value, 11.0, VALUE_COLUMN_X, y);
        y -= ROW_STEP;
    }
    y += ROW_STEP - 3.0;
    rule(&layer, y);

    // Emphasized total after the last row
    y -= 12.0;
    push_line(&layer, &font_bold, &report.total_line(), 14.0, VALUE_COLUMN_X, y);

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| RentError::Render(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| RentError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ChargeCategory, ChargeSheet};
    use chrono::NaiveDate;

    fn sample_report() -> Report {
        let mut sheet = ChargeSheet::new();
        sheet.set_address("Main Street 5");
        sheet.set(ChargeCategory::Rent, "1500");
        sheet.set(ChargeCategory::TvInternet, "60");
        Report::build(
            &sheet,
            Amount::parse("1560").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        )
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_empty_sheet_succeeds() {
        let report = Report::build(
            &ChargeSheet::new(),
            Amount::zero(),
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        );
        let bytes = render(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
