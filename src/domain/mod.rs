pub mod fare;
pub mod session;
pub mod spot;

// Re-export commonly used types
pub use fare::FareSchedule;
pub use session::{ParkingSession, SessionRepository, SessionStatus};
pub use spot::{ParkingSpot, SpotRepository, VehicleCategory};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
