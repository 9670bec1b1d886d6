//! Portal Backstage - place narrative prototype backend
//!
//! Serves synthetic place narratives over HTTP and keeps submitted
//! artifacts in memory for the lifetime of the process.

use anyhow::Result;
use clap::{Parser, Subcommand};
use portal_backstage::{config::PortalConfig, place::AnalysisRequest, server};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portal-backstage")]
#[command(author = "Portal Lab Team")]
#[command(version)]
#[command(about = "Place narrative prototype backend")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PORTAL_BACKSTAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a place analysis without starting the server
    Analyze {
        /// Latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let mut config = PortalConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::info!("Starting Portal Backstage");
            server::run(&config).await?;
        }
        Commands::Analyze { lat, lon, note } => {
            let result = AnalysisRequest::new(lat, lon).with_note(note).analyze();
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Config { default } => {
            let shown = if default {
                PortalConfig::default()
            } else {
                config
            };
            println!("{}", shown.to_toml()?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, json: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("portal_backstage={},tower_http=debug", log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
