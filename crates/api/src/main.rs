//! Symptom Advisor - Main Entry Point

use api::{init_logging, init_metrics, run_server, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_logging(config.level());

    info!("=== Symptom Advisor v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Rules: {} ({} matching)",
        config.rules_path,
        config.match_policy.as_str()
    );

    if let Some(addr) = &config.metrics_addr {
        init_metrics(addr)?;
    }

    run_server(&config).await?;

    Ok(())
}
