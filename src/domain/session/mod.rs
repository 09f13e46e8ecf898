//! Session aggregate
//!
//! Contains the ParkingSession entity (the domain analog of a ticket)
//! and its repository interface.

pub mod model;
pub mod repository;

pub use model::{ParkingSession, SessionStatus};
pub use repository::SessionRepository;
