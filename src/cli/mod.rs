//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the core library.

pub mod calc;
pub mod config;
pub mod report;

pub use calc::{handle_calc_command, CalcArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use report::{handle_report_command, ReportArgs};

use clap::Args;

use crate::models::{ChargeCategory, ChargeSheet};

/// The six charge value options shared by `calc` and `report`
///
/// Omitted options behave like empty form fields: they normalize to zero.
#[derive(Args, Debug)]
pub struct ChargeValueArgs {
    /// Rent
    #[arg(long)]
    pub rent: Option<String>,

    /// Administration fee
    #[arg(long = "admin-fee")]
    pub admin_fee: Option<String>,

    /// Periodic media settlement
    #[arg(long = "media")]
    pub media_settlement: Option<String>,

    /// Advance payment for electricity
    #[arg(long = "electricity-advance")]
    pub electricity_advance: Option<String>,

    /// Electricity invoice
    #[arg(long = "electricity-invoice")]
    pub electricity_invoice: Option<String>,

    /// TV/Internet
    #[arg(long = "tv")]
    pub tv_internet: Option<String>,
}

impl ChargeValueArgs {
    /// Build a charge sheet from the given options
    pub fn into_sheet(self) -> ChargeSheet {
        let mut sheet = ChargeSheet::new();
        let values = [
            (ChargeCategory::Rent, self.rent),
            (ChargeCategory::AdministrationFee, self.admin_fee),
            (ChargeCategory::MediaSettlement, self.media_settlement),
            (ChargeCategory::ElectricityAdvance, self.electricity_advance),
            (ChargeCategory::ElectricityInvoice, self.electricity_invoice),
            (ChargeCategory::TvInternet, self.tv_internet),
        ];
        for (category, value) in values {
            if let Some(value) = value {
                sheet.set(category, value);
            }
        }
        sheet
    }
}
