//! Configuration module
//!
//! TOML configuration for the lot layout, fare schedule and logging,
//! with defaults usable when no file is present.

use std::path::{Path, PathBuf};

use chrono::Duration;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::FareSchedule;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid fare value: {0}")]
    InvalidFare(String),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub lot: LotConfig,
    pub fare: FareConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Lot layout: how many spots of each category are seeded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub car_spots: u32,
    pub bike_spots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            car_spots: 3,
            bike_spots: 2,
        }
    }
}

/// Fare constants. Rates are per hour in the lot's currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    pub car_rate_per_hour: f64,
    pub bike_rate_per_hour: f64,
    pub free_minutes: i64,
    pub loyalty_multiplier: f64,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            car_rate_per_hour: 1.5,
            bike_rate_per_hour: 1.0,
            free_minutes: 30,
            loyalty_multiplier: 0.95,
        }
    }
}

impl FareConfig {
    /// Convert configured floats into the fixed-point schedule.
    pub fn to_schedule(&self) -> Result<FareSchedule, ConfigError> {
        let rate = |value: f64, name: &str| {
            Decimal::try_from(value)
                .map_err(|_| ConfigError::InvalidFare(format!("{name} = {value}")))
        };
        Ok(FareSchedule {
            car_rate_per_hour: rate(self.car_rate_per_hour, "car_rate_per_hour")?,
            bike_rate_per_hour: rate(self.bike_rate_per_hour, "bike_rate_per_hour")?,
            free_period: Duration::minutes(self.free_minutes),
            loyalty_multiplier: rate(self.loyalty_multiplier, "loyalty_multiplier")?,
        })
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default location: `<user config dir>/parklot/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parklot")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
