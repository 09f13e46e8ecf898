//! Console input collection.
//!
//! Raw lines come from any `BufRead`; validation happens here so the
//! core services only ever see a recognized category or a non-empty
//! registration number.

use std::io::{self, BufRead, BufReader, Stdin};

use crate::domain::{DomainError, DomainResult, VehicleCategory};

/// Top-level menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ParkVehicle,
    ExitVehicle,
    Quit,
}

/// Source of validated user selections and strings.
pub trait InputSource {
    fn read_action(&mut self) -> DomainResult<MenuAction>;
    fn read_category(&mut self) -> DomainResult<VehicleCategory>;
    fn read_registration(&mut self) -> DomainResult<String>;
}

/// Input source over a buffered reader; `ConsoleInput::stdin()` for
/// the real console.
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl ConsoleInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// `None` means the stream is exhausted.
    fn read_line(&mut self) -> DomainResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| DomainError::Storage(format!("Failed to read input: {e}")))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn read_action(&mut self) -> DomainResult<MenuAction> {
        // End of input quits, so a closed stdin cannot spin the menu
        let Some(line) = self.read_line()? else {
            return Ok(MenuAction::Quit);
        };
        match line.as_str() {
            "1" => Ok(MenuAction::ParkVehicle),
            "2" => Ok(MenuAction::ExitVehicle),
            "3" => Ok(MenuAction::Quit),
            other => Err(DomainError::InvalidSelection(other.to_string())),
        }
    }

    fn read_category(&mut self) -> DomainResult<VehicleCategory> {
        let line = self.read_line()?.unwrap_or_default();
        match line.as_str() {
            "1" => Ok(VehicleCategory::Car),
            "2" => Ok(VehicleCategory::Bike),
            other => Err(DomainError::InvalidSelection(other.to_string())),
        }
    }

    fn read_registration(&mut self) -> DomainResult<String> {
        let line = self.read_line()?.unwrap_or_default();
        if line.is_empty() {
            return Err(DomainError::EmptyRegistration);
        }
        Ok(line)
    }
}

// ── Tests ──────────────────────────────────────────────────────
