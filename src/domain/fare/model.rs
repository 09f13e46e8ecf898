//! Fare schedule domain entity

use chrono::Duration;
use rust_decimal::Decimal;

use crate::domain::spot::VehicleCategory;

/// Pricing constants for the lot.
///
/// Rates are per hour, in the lot's currency, two-decimal precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareSchedule {
    /// Hourly rate for car spots
    pub car_rate_per_hour: Decimal,
    /// Hourly rate for bike spots
    pub bike_rate_per_hour: Decimal,
    /// Courtesy threshold: stays up to this long are free
    pub free_period: Duration,
    /// Multiplier applied for returning customers
    pub loyalty_multiplier: Decimal,
}

impl FareSchedule {
    /// Hourly rate for a category. Exhaustive over the closed set.
    pub fn hourly_rate(&self, category: VehicleCategory) -> Decimal {
        match category {
            VehicleCategory::Car => self.car_rate_per_hour,
            VehicleCategory::Bike => self.bike_rate_per_hour,
        }
    }
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            car_rate_per_hour: Decimal::new(150, 2),  // 1.50 / h
            bike_rate_per_hour: Decimal::new(100, 2), // 1.00 / h
            free_period: Duration::minutes(30),
            loyalty_multiplier: Decimal::new(95, 2), // 5% off
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_differ_per_category() {
        let schedule = FareSchedule::default();
        assert_eq!(
            schedule.hourly_rate(VehicleCategory::Car),
            Decimal::new(150, 2)
        );
        assert_eq!(
            schedule.hourly_rate(VehicleCategory::Bike),
            Decimal::new(100, 2)
        );
    }

    #[test]
    fn default_free_period_is_thirty_minutes() {
        assert_eq!(FareSchedule::default().free_period, Duration::minutes(30));
    }
}
