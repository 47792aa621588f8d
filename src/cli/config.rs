//! Configuration inspection commands.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Inspect the configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
    /// Write the default configuration if no config file exists
    Init,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show { json: true } => println!("{}", to_json(config, true)?),
            ConfigCommand::Show { json: false } => {
                let text = toml::to_string_pretty(config)
                    .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
                print!("{text}");
            }
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
            }
            ConfigCommand::Init => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                if path.exists() {
                    println!("Config already exists: {}", path.display());
                } else {
                    Config::new()
                        .save_to(&path)
                        .map_err(|e| CliError::io(format!("{e:#}")))?;
                    println!("✓ Wrote default config");
                    println!("  Path: {}", path.display());
                }
            }
        }
        Ok(())
    }
}
