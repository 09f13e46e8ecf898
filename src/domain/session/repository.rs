//! Session repository interface

use async_trait::async_trait;

use super::model::ParkingSession;
use crate::domain::DomainResult;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session and assign its id.
    async fn save(&self, session: ParkingSession) -> DomainResult<ParkingSession>;

    /// The open session for a registration, if the vehicle is parked.
    async fn find_open_by_registration(
        &self,
        registration: &str,
    ) -> DomainResult<Option<ParkingSession>>;

    /// Total number of sessions recorded for a registration, open and
    /// closed alike. Drives the returning-customer discount.
    async fn count_for_registration(&self, registration: &str) -> DomainResult<i64>;

    /// Update an existing session (close it, in practice).
    async fn update(&self, session: ParkingSession) -> DomainResult<()>;
}
