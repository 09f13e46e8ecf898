//! Parking session (ticket) domain entity

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::spot::ParkingSpot;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Vehicle is parked, no exit recorded
    Open,
    /// Exit processed, price computed
    Closed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Open" => Some(Self::Open),
            "Closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One vehicle's stay from admission to release.
///
/// Created open by the orchestrator, closed exactly once when the exit
/// is processed, never reopened.
#[derive(Debug, Clone)]
pub struct ParkingSession {
    /// Assigned by the session repository on save; 0 before persistence
    pub id: i32,
    /// The spot occupied for the whole session
    pub spot: ParkingSpot,
    /// Vehicle registration number
    pub registration: String,
    /// When the vehicle was admitted
    pub entry_time: DateTime<Utc>,
    /// When the vehicle left; `None` while the session is open
    pub exit_time: Option<DateTime<Utc>>,
    /// Final fare, two-decimal precision; zero while open
    pub price: Decimal,
    pub status: SessionStatus,
}

impl ParkingSession {
    /// Start an open session. The spot is recorded as occupied.
    pub fn open(
        spot: ParkingSpot,
        registration: impl Into<String>,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            spot,
            registration: registration.into(),
            entry_time,
            exit_time: None,
            price: Decimal::ZERO,
            status: SessionStatus::Open,
        }
    }

    /// Close the session with the computed fare. Terminal transition.
    pub fn close(&mut self, exit_time: DateTime<Utc>, price: Decimal) {
        self.exit_time = Some(exit_time);
        self.price = price;
        self.status = SessionStatus::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    /// Occupancy duration, available once the session is closed.
    pub fn duration(&self) -> Option<Duration> {
        self.exit_time.map(|exit| exit - self.entry_time)
    }
}

// ── Tests ──────────────────────────────────────────────────────
