//! Settlement report building
//!
//! Turns a charge sheet plus a computed total into the tabular statement
//! that gets rendered to PDF: six fixed rows, a generation date, and a
//! suggested file name derived from the address and date.
//!
//! Rows carry the raw text as entered (with a literal "0" fallback), not the
//! normalized amounts. If the user edits fields after calculating, the rows
//! and the total can diverge; that mirrors the settlement form this tool
//! replaces and is kept on purpose.

pub mod pdf;

use chrono::{Datelike, NaiveDate};

use crate::error::RentResult;
use crate::models::{Amount, ChargeCategory, ChargeSheet};

/// Currency label appended to the rendered total
pub const CURRENCY_LABEL: &str = "zl";

/// Title line of the statement
pub const REPORT_TITLE: &str = "Rent Calculation";

/// Placeholder used in the file name when no address was entered
const FILE_NAME_FALLBACK_ADDRESS: &str = "No_address";

/// Placeholder shown in the document header when no address was entered
const DOCUMENT_FALLBACK_ADDRESS: &str = "No address provided";

/// One table row of the statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Category label (left column)
    pub label: &'static str,
    /// Raw value as entered, or "0" (right column)
    pub value: String,
}

/// A built settlement statement, immutable once created
#[derive(Debug, Clone)]
pub struct Report {
    /// Local calendar date the report was generated on
    pub generated_on: NaiveDate,
    /// Address exactly as entered (possibly empty)
    pub address: String,
    /// The six table rows in canonical category order
    pub rows: Vec<ReportRow>,
    /// Total from the last successful calculation
    pub total: Amount,
    /// Suggested download file name
    pub file_name: String,
}

impl Report {
    /// Build a report from the current raw sheet and the stored total
    pub fn build(sheet: &ChargeSheet, total: Amount, generated_on: NaiveDate) -> Self {
        let rows = ChargeCategory::ALL
            .iter()
            .map(|category| ReportRow {
                label: category.label(),
                value: sheet.raw_or_zero(*category).to_string(),
            })
            .collect();

        let file_name = file_name_for(sheet.address(), generated_on);

        Self {
            generated_on,
            address: sheet.address().to_string(),
            rows,
            total,
            file_name,
        }
    }

    /// Generation date as `day-month-year`, numeric, no zero padding
    pub fn formatted_date(&self) -> String {
        format_date(self.generated_on)
    }

    /// Address for the document header, with a readable placeholder when empty
    pub fn display_address(&self) -> &str {
        if self.address.trim().is_empty() {
            DOCUMENT_FALLBACK_ADDRESS
        } else {
            &self.address
        }
    }

    /// Total line text, e.g. "Total: 1760.45 zl"
    pub fn total_line(&self) -> String {
        format!("Total: {}", self.total.format_with_label(CURRENCY_LABEL))
    }

    /// Render this report to an in-memory PDF payload
    pub fn to_pdf(&self) -> RentResult<Vec<u8>> {
        pdf::render(self)
    }
}

/// Format a date as `day-month-year` with 1-based month and no padding
fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// Deterministic file name: `{address}_{d-m-y}_Rent_Calculation.pdf`
fn file_name_for(address: &str, date: NaiveDate) -> String {
    let address = if address.trim().is_empty() {
        FILE_NAME_FALLBACK_ADDRESS
    } else {
        address
    };
    format!("{}_{}_Rent_Calculation.pdf", address, format_date(date))
}
