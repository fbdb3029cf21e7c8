// rest_api/src/main.rs

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use rest_api::{load_rest_api_config, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Accessible assistant API for patients with disabilities: patient profiles,
/// appointment management and accessibility-focused reminders.
#[derive(Debug, Parser)]
#[command(name = "manas-assistant", version, about)]
struct Args {
    /// Optional YAML/TOML/JSON config file.
    #[arg(short, long, env = "MANAS_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind, overrides config and environment.
    #[arg(long)]
    host: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_rest_api_config(args.config.as_deref())?.with_overrides(args.host, args.port);

    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{0},tower_http={0}", config.log_level)))
        .map_err(|e| anyhow!("Invalid log level {:?}: {e}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    info!(?config, "starting Manas 360 assistant");
    start_server(config, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
