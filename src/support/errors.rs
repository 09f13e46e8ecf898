use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::VehicleCategory;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No {0} spot available, the lot is full for this category")]
    NoSpotAvailable(VehicleCategory),

    #[error("Vehicle {0} is already parked")]
    AlreadyParked(String),

    #[error("No open session for vehicle {0}")]
    UnknownVehicle(String),

    #[error("Exit time {exit} precedes entry time {entry}")]
    InvalidInterval {
        entry: DateTime<Utc>,
        exit: DateTime<Utc>,
    },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Registration number must not be empty")]
    EmptyRegistration,

    #[error("Spot not found: {0}")]
    SpotNotFound(i32),

    #[error("Session not found: {0}")]
    SessionNotFound(i32),

    #[error("Storage error: {0}")]
    Storage(String),
}
