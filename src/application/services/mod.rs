pub mod fare;
pub mod parking;

pub use fare::FareCalculator;
pub use parking::{AdmissionReceipt, ExitReceipt, ParkingService};
