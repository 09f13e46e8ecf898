//! # Parklot
//!
//! Single-facility parking lot service: spot allocation, parking
//! session lifecycle and fare calculation, driven from an interactive
//! console menu.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture layering:
//!
//! - **domain**: core entities (spot, session, fare schedule) and
//!   repository traits
//! - **application**: the parking orchestrator and the pure fare
//!   calculator
//! - **infrastructure**: storage backends
//! - **interfaces**: console input collection and the shell
//! - **support**: errors and the clock capability

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig};
