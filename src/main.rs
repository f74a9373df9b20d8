//! Residence Tracker - Main entry point
//!
//! Runs an interactive session on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use residence_tracker::{shell, Config, InMemoryResidenceRepository};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so the configured level can apply
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut repo = InMemoryResidenceRepository::new();
    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();

    info!("Starting residence tracker session");
    let processed = shell::run_session(reader, &mut writer, &mut repo, &config).await?;

    info!(
        lines = processed,
        residences = repo.residences().len(),
        "Residence tracker session complete"
    );
    Ok(())
}
