use std::fs;

use anyhow::{Context, Result};

use rollcall::model::config::AppConfig;
use rollcall::report;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rollcall=info")),
        )
        .init();

    tracing::info!("rollcall starting");

    let config = AppConfig::load()?;

    let html = report::generate(
        &config.players_path(),
        &config.events_path(),
        &config.rsvps_path(),
    )?;

    let output = config.output_path();
    fs::write(&output, html).with_context(|| format!("cannot write {}", output.display()))?;

    tracing::info!("report written to {}", output.display());
    Ok(())
}
