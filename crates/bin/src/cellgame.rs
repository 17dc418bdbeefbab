//! Cell Game - headless simulation runner.

use tracing::info;
use tracing_subscriber::EnvFilter;

mod autopilot;
mod log_frontend;
mod runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Cell Game headless runner v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = game::Config::load()?;
    config.validate()?;
    info!("Loaded configuration");
    info!("  Arena: {}x{}", config.arena.width, config.arena.height);
    info!("  Tick interval: {}ms", config.runner.tick_interval_ms);
    info!(
        "  Bacteria: {} standard, {} bomb",
        config.bacteria_count(game::BacteriaKind::Standard),
        config.bacteria_count(game::BacteriaKind::Bomb)
    );
    info!("  Autopilot: {}", config.runner.autopilot);

    runner::run(config).await?;

    Ok(())
}
