//! `report` command
//!
//! Validates and sums the six charges, builds the settlement statement, and
//! writes it as a PDF. By default the file lands in the statements directory
//! under the suggested file name.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use super::ChargeValueArgs;
use crate::config::{RentPaths, Settings};
use crate::display::format_sheet_table;
use crate::error::{RentError, RentResult};
use crate::session::CalcSession;

/// Arguments for the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub values: ChargeValueArgs,

    /// Address printed on the statement and used in the file name
    #[arg(long)]
    pub address: Option<String>,

    /// Write the PDF to this path instead of the statements directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Generation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Handle the `report` command
pub fn handle_report_command(
    settings: &Settings,
    paths: &RentPaths,
    args: ReportArgs,
) -> RentResult<()> {
    let mut sheet = args.values.into_sheet();
    if let Some(address) = args.address {
        sheet.set_address(address);
    }

    let mut session = CalcSession::new(settings.parse_policy);
    let total = session.calculate(&sheet)?;
    print!("{}", format_sheet_table(&sheet, &total));

    let generated_on = args.date.unwrap_or_else(|| Local::now().date_naive());
    let report = session.generate(&sheet, generated_on);
    let bytes = report.to_pdf()?;

    let out_path = match args.out {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.statements_dir().join(&report.file_name)
        }
    };

    std::fs::write(&out_path, &bytes).map_err(|e| {
        RentError::Io(format!("Failed to write {}: {}", out_path.display(), e))
    })?;

    println!();
    println!("Statement written to {}", out_path.display());
    println!("Suggested file name: {}", report.file_name);
    Ok(())
}
