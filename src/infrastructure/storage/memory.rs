//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, ParkingSession, ParkingSpot, SessionRepository, SessionStatus,
    SpotRepository, VehicleCategory,
};

/// In-memory lot storage, backing both repositories.
///
/// Interactions in the reference workflow run one at a time; the maps
/// and the id counter are nevertheless concurrency-safe so the
/// repository layer stays sound if callers ever overlap.
pub struct InMemoryStorage {
    spots: DashMap<i32, ParkingSpot>,
    sessions: DashMap<i32, ParkingSession>,
    session_counter: AtomicI32,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            spots: DashMap::new(),
            sessions: DashMap::new(),
            session_counter: AtomicI32::new(1),
        }
    }

    /// Seed the lot: car spots first, then bike spots, numbered
    /// ascending from 1, all available.
    pub fn with_layout(car_spots: u32, bike_spots: u32) -> Self {
        let storage = Self::new();
        let mut id = 1;
        for _ in 0..car_spots {
            storage.spots.insert(id, ParkingSpot::new(id, VehicleCategory::Car));
            id += 1;
        }
        for _ in 0..bike_spots {
            storage
                .spots
                .insert(id, ParkingSpot::new(id, VehicleCategory::Bike));
            id += 1;
        }
        storage
    }

    /// Current state of a spot, for wiring and tests.
    pub fn spot(&self, spot_id: i32) -> Option<ParkingSpot> {
        self.spots.get(&spot_id).map(|s| s.clone())
    }

    /// Current state of a session, for wiring and tests.
    pub fn session(&self, id: i32) -> Option<ParkingSession> {
        self.sessions.get(&id).map(|s| s.clone())
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpotRepository for InMemoryStorage {
    async fn next_available(
        &self,
        category: VehicleCategory,
    ) -> DomainResult<Option<ParkingSpot>> {
        Ok(self
            .spots
            .iter()
            .filter(|entry| entry.category == category && entry.available)
            .map(|entry| entry.clone())
            .min_by_key(|spot| spot.id))
    }

    async fn set_availability(&self, spot_id: i32, available: bool) -> DomainResult<()> {
        let mut spot = self
            .spots
            .get_mut(&spot_id)
            .ok_or(DomainError::SpotNotFound(spot_id))?;
        spot.available = available;
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for InMemoryStorage {
    async fn save(&self, mut session: ParkingSession) -> DomainResult<ParkingSession> {
        session.id = self.session_counter.fetch_add(1, Ordering::SeqCst);
        self.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_open_by_registration(
        &self,
        registration: &str,
    ) -> DomainResult<Option<ParkingSession>> {
        Ok(self
            .sessions
            .iter()
            .find(|entry| entry.registration == registration && entry.status == SessionStatus::Open)
            .map(|entry| entry.clone()))
    }

    async fn count_for_registration(&self, registration: &str) -> DomainResult<i64> {
        Ok(self
            .sessions
            .iter()
            .filter(|entry| entry.registration == registration)
            .count() as i64)
    }

    async fn update(&self, session: ParkingSession) -> DomainResult<()> {
        if !self.sessions.contains_key(&session.id) {
            return Err(DomainError::SessionNotFound(session.id));
        }
        self.sessions.insert(session.id, session);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
