//! Spot repository interface

use async_trait::async_trait;

use super::model::{ParkingSpot, VehicleCategory};
use crate::domain::DomainResult;

/// Allocation view over the lot's spots.
#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Next free spot of the given category, lowest spot number first.
    /// `None` means the lot is full for this category.
    async fn next_available(&self, category: VehicleCategory)
        -> DomainResult<Option<ParkingSpot>>;

    /// Persist an availability change for a spot.
    async fn set_availability(&self, spot_id: i32, available: bool) -> DomainResult<()>;
}
