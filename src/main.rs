//! Parking lot console service.
//!
//! Reads configuration from a TOML file (~/.config/parklot/config.toml,
//! overridable with PARKLOT_CONFIG), seeds the in-memory lot, and runs
//! the interactive shell.

use std::sync::Arc;

use tracing::{error, info};

use parklot::application::services::{FareCalculator, ParkingService};
use parklot::config::{default_config_path, AppConfig};
use parklot::infrastructure::storage::InMemoryStorage;
use parklot::interfaces::console::{ConsoleInput, ConsoleShell};
use parklot::support::time::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PARKLOT_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!(
        car_spots = config.lot.car_spots,
        bike_spots = config.lot.bike_spots,
        "Starting parking lot service"
    );

    // ── Storage and services ───────────────────────────────────
    let storage = Arc::new(InMemoryStorage::with_layout(
        config.lot.car_spots,
        config.lot.bike_spots,
    ));
    let schedule = config.fare.to_schedule()?;

    let service = Arc::new(ParkingService::new(
        storage.clone(),
        storage,
        FareCalculator::new(schedule),
        Arc::new(SystemClock),
    ));

    // ── Interactive shell ──────────────────────────────────────
    println!("Welcome to the parking system!");
    let mut shell = ConsoleShell::new(service, ConsoleInput::stdin());
    shell.run().await?;

    info!("Parking lot service shutdown complete");
    Ok(())
}
