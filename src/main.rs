use anyhow::Result;
use clap::{Parser, Subcommand};

use rentcalc::cli::{
    handle_calc_command, handle_config_command, handle_report_command, CalcArgs, ConfigCommands,
    ReportArgs,
};
use rentcalc::config::{RentPaths, Settings};

#[derive(Parser)]
#[command(
    name = "rentcalc",
    version,
    about = "Command-line rent settlement calculator",
    long_about = "rentcalc collects six monetary charges (rent, administration fee, \
                  media settlement, electricity advance, electricity invoice, \
                  TV/Internet), validates and sums them, and renders a PDF \
                  settlement statement."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and sum the six charges
    Calc(CalcArgs),

    /// Generate a PDF settlement statement
    Report(ReportArgs),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RentPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let result = match cli.command {
        Commands::Calc(args) => handle_calc_command(&settings, args),
        Commands::Report(args) => handle_report_command(&settings, &paths, args),
        Commands::Config(cmd) => handle_config_command(&paths, cmd),
    };

    if let Err(err) = result {
        if err.is_validation() {
            // Same wording the settlement form used for its blocking alert
            eprintln!("Please enter valid positive numbers.");
        }
        return Err(err.into());
    }

    Ok(())
}
