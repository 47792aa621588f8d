//! ArchSense Web Server Binary
//!
//! This binary starts the ArchSense web server that provides a REST API
//! for the plan editor and 3D viewer frontends.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured bind address (127.0.0.1:8080 by default)
//! archsense-web
//!
//! # Override host and port
//! archsense-web --host 0.0.0.0 --port 9000
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archsense::config::Config;
use archsense::web;

/// ArchSense Web Server - REST API for layout synthesis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    info!(
        "Default site: {}x{} mm",
        config.site.default_width_mm, config.site.default_depth_mm
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context(format!(
            "Invalid bind address {}:{}",
            config.server.host, config.server.port
        ))?;

    web::run_server(config, addr).await
}
