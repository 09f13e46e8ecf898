//! Fare aggregate
//!
//! Pricing constants for the lot. The schedule itself is configured,
//! not stored; the calculator that applies it lives in the
//! application layer.

pub mod model;

pub use model::FareSchedule;
