//! Terminal output formatting
//!
//! Plain-text siblings of the PDF layout, for printing a charge sheet and
//! its total in the terminal.

pub mod sheet;

pub use sheet::format_sheet_table;
