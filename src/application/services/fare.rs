//! Fare calculation for completed parking sessions.
//!
//! Pure component: given entry time, exit time, category and the
//! returning-customer flag, produces a price. No I/O, no shared
//! state, deterministic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult, FareSchedule, VehicleCategory};

const MILLIS_PER_HOUR: i64 = 3_600_000;

pub struct FareCalculator {
    schedule: FareSchedule,
}

impl FareCalculator {
    pub fn new(schedule: FareSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FareSchedule {
        &self.schedule
    }

    /// Price for a completed stay.
    ///
    /// Stays up to the free period cost exactly zero. Beyond that the
    /// price is the exact fractional duration in hours times the
    /// category's hourly rate, times 0.95 for returning customers,
    /// truncated (never rounded up) to two decimals.
    pub fn compute(
        &self,
        entry_time: DateTime<Utc>,
        exit_time: DateTime<Utc>,
        category: VehicleCategory,
        discount: bool,
    ) -> DomainResult<Decimal> {
        if exit_time < entry_time {
            return Err(DomainError::InvalidInterval {
                entry: entry_time,
                exit: exit_time,
            });
        }

        let elapsed = exit_time - entry_time;
        if elapsed <= self.schedule.free_period {
            return Ok(Decimal::ZERO);
        }

        let hours = Decimal::from(elapsed.num_milliseconds()) / Decimal::from(MILLIS_PER_HOUR);
        let multiplier = if discount {
            self.schedule.loyalty_multiplier
        } else {
            Decimal::ONE
        };

        let price = hours * self.schedule.hourly_rate(category) * multiplier;
        Ok(price.trunc_with_scale(2))
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        Self::new(FareSchedule::default())
    }
}

// ── Tests ──────────────────────────────────────────────────────
