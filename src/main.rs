//! ArchSense - floor-plan layout synthesizer
//!
//! Command-line front end for generating floor plans and browsing the room
//! and furniture catalogs.

use archsense::cli::{CatalogArgs, CliError, CliResult, ConfigArgs, GenerateArgs};
use archsense::config::Config;
use archsense::constants::{APP_BINARY_NAME, APP_NAME};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ArchSense - floor-plan layout synthesizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synthesize a floor plan and print it as JSON
    Generate(GenerateArgs),
    /// Browse the room and furniture catalogs
    Catalog(CatalogArgs),
    /// Inspect the configuration
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Catalog(args) => args.execute(),
        Commands::Generate(args) => args.execute(&load_config()?),
        Commands::Config(args) => args.execute(&load_config()?),
    }
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| {
        CliError::validation(format!(
            "Invalid configuration: {e:#}\nRun `{APP_BINARY_NAME} config path` to locate the file."
        ))
    })
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("{APP_NAME}: {err}");
        std::process::exit(err.exit_code());
    }
}
