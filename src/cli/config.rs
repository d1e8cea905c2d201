//! `config` command
//!
//! Shows the stored configuration and lets the user switch the parse policy.

use clap::Subcommand;

use crate::config::{RentPaths, Settings};
use crate::error::RentResult;
use crate::normalize::ParsePolicy;

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Set the parse policy
    #[command(name = "set-policy")]
    SetPolicy {
        /// Policy name: 'truncate' or 'loose'
        policy: String,
    },
}

/// Handle a config command
pub fn handle_config_command(paths: &RentPaths, cmd: ConfigCommands) -> RentResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let settings = Settings::load_or_create(paths)?;
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Statements dir: {}", paths.statements_dir().display());
            println!("Parse policy:   {}", settings.parse_policy);
        }

        ConfigCommands::SetPolicy { policy } => {
            let policy: ParsePolicy = policy.parse()?;
            let mut settings = Settings::load_or_create(paths)?;
            settings.parse_policy = policy;
            settings.save(paths)?;
            println!("Parse policy set to {}", policy);
        }
    }

    Ok(())
}
