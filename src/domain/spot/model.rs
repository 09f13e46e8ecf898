//! Parking spot domain entity

/// Vehicle category a spot can hold.
///
/// Closed set: unknown categories are rejected when user input is
/// parsed, never through a default match arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Car,
    Bike,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Bike => "BIKE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CAR" => Some(Self::Car),
            "BIKE" => Some(Self::Bike),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single physical parking location of a fixed category.
///
/// The `available` flag is the single source of truth for allocation:
/// it is `false` exactly while an open session references the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    /// Spot number, positive and stable for the lifetime of the lot
    pub id: i32,
    /// Category of vehicle this spot accepts
    pub category: VehicleCategory,
    /// Whether the spot is free for allocation
    pub available: bool,
}

impl ParkingSpot {
    pub fn new(id: i32, category: VehicleCategory) -> Self {
        Self {
            id,
            category,
            available: true,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spot_is_available() {
        let spot = ParkingSpot::new(1, VehicleCategory::Car);
        assert!(spot.available);
        assert_eq!(spot.id, 1);
        assert_eq!(spot.category, VehicleCategory::Car);
    }

    #[test]
    fn category_roundtrip() {
        for category in &[VehicleCategory::Car, VehicleCategory::Bike] {
            let parsed = VehicleCategory::from_str(category.as_str());
            assert_eq!(parsed, Some(*category));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_eq!(VehicleCategory::from_str("TRUCK"), None);
        assert_eq!(VehicleCategory::from_str(""), None);
        assert_eq!(VehicleCategory::from_str("car"), None);
    }
}
