//! Charge sheet table formatting for terminal display

use crate::models::{Amount, ChargeCategory, ChargeSheet};
use crate::report::CURRENCY_LABEL;

const LABEL_WIDTH: usize = 33;
const VALUE_WIDTH: usize = 12;
const TABLE_WIDTH: usize = LABEL_WIDTH + VALUE_WIDTH + 1;

/// Format the six categories and the computed total as an aligned table
///
/// Rows show the raw text as entered (or "0"), matching what the PDF rows
/// would show; the total is the validated sum.
pub fn format_sheet_table(sheet: &ChargeSheet, total: &Amount) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<label$} {:>value$}\n",
        "Category",
        "Value",
        label = LABEL_WIDTH,
        value = VALUE_WIDTH
    ));
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for category in ChargeCategory::ALL {
        output.push_str(&format!(
            "{:<label$} {:>value$}\n",
            category.label(),
            sheet.raw_or_zero(category),
            label = LABEL_WIDTH,
            value = VALUE_WIDTH
        ));
    }

    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<label$} {:>value$}\n",
        "Total",
        total.format_with_label(CURRENCY_LABEL),
        label = LABEL_WIDTH,
        value = VALUE_WIDTH
    ));

    output
}
