//! Spot aggregate
//!
//! Contains the ParkingSpot entity, the vehicle category, and the
//! repository interface used for allocation.

pub mod model;
pub mod repository;

pub use model::{ParkingSpot, VehicleCategory};
pub use repository::SpotRepository;
