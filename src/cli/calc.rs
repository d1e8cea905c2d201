//! `calc` command
//!
//! Validates and sums the six charges, then prints the sheet table with the
//! computed total.

use clap::Args;

use super::ChargeValueArgs;
use crate::config::Settings;
use crate::display::format_sheet_table;
use crate::error::RentResult;
use crate::session::CalcSession;

/// Arguments for the `calc` command
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub values: ChargeValueArgs,
}

/// Handle the `calc` command
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> RentResult<()> {
    let sheet = args.values.into_sheet();

    let mut session = CalcSession::new(settings.parse_policy);
    let total = session.calculate(&sheet)?;

    print!("{}", format_sheet_table(&sheet, &total));
    Ok(())
}
