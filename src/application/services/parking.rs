//! Parking session orchestration.
//!
//! Drives the two user-facing workflows: vehicle admission and vehicle
//! release. Owns the interaction sequence and the loyalty-discount
//! decision; spot state and session records live behind repositories.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::services::FareCalculator;
use crate::domain::{
    DomainError, DomainResult, ParkingSession, SessionRepository, SpotRepository, VehicleCategory,
};
use crate::support::time::Clock;

/// Outcome of a successful admission.
#[derive(Debug, Clone)]
pub struct AdmissionReceipt {
    /// The freshly opened session, id assigned
    pub session: ParkingSession,
    /// Total sessions recorded for this registration, this one included
    pub visit_count: i64,
    /// Whether the vehicle has parked here before
    pub returning: bool,
}

/// Outcome of a successful release.
#[derive(Debug, Clone)]
pub struct ExitReceipt {
    /// The closed session, final price set
    pub session: ParkingSession,
    /// Whether the returning-customer multiplier reduced a non-zero price
    pub discount_applied: bool,
}

/// Service for parking lot business operations
pub struct ParkingService {
    spots: Arc<dyn SpotRepository>,
    sessions: Arc<dyn SessionRepository>,
    fare: FareCalculator,
    clock: Arc<dyn Clock>,
}

impl ParkingService {
    pub fn new(
        spots: Arc<dyn SpotRepository>,
        sessions: Arc<dyn SessionRepository>,
        fare: FareCalculator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            spots,
            sessions,
            fare,
            clock,
        }
    }

    /// Admit a vehicle: allocate a free spot of the requested category
    /// and open a session for it.
    ///
    /// Fails without touching any state when the lot is full for the
    /// category, when the registration is empty, or when the vehicle
    /// is already parked. The spot mutation and the session creation
    /// are atomic: if the session cannot be saved, the spot's
    /// availability is rolled back.
    pub async fn admit(
        &self,
        category: VehicleCategory,
        registration: &str,
    ) -> DomainResult<AdmissionReceipt> {
        let registration = registration.trim();
        if registration.is_empty() {
            return Err(DomainError::EmptyRegistration);
        }

        let spot = self
            .spots
            .next_available(category)
            .await?
            .ok_or(DomainError::NoSpotAvailable(category))?;

        if self
            .sessions
            .find_open_by_registration(registration)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyParked(registration.to_string()));
        }

        let spot_id = spot.id;
        self.spots.set_availability(spot_id, false).await?;

        let mut occupied = spot;
        occupied.available = false;
        let session = ParkingSession::open(occupied, registration, self.clock.now());

        let session = match self.sessions.save(session).await {
            Ok(saved) => saved,
            Err(err) => {
                // Undo the allocation so the failed admission leaves no trace
                if let Err(rollback) = self.spots.set_availability(spot_id, true).await {
                    warn!(
                        spot_id,
                        error = %rollback,
                        "Failed to roll back spot availability after save error"
                    );
                }
                return Err(err);
            }
        };

        let visit_count = self.sessions.count_for_registration(registration).await?;
        let returning = visit_count > 1;

        info!(
            session_id = session.id,
            spot_id = session.spot.id,
            category = %category,
            registration,
            visit_count,
            "Vehicle admitted"
        );

        Ok(AdmissionReceipt {
            session,
            visit_count,
            returning,
        })
    }

    /// Release a vehicle: stamp the exit time, compute the fare, close
    /// the session, and free the spot.
    ///
    /// The spot is released only after the closed session is durably
    /// persisted; a persistence failure leaves the spot unavailable so
    /// it cannot be double-allocated while its vehicle is still inside.
    pub async fn release(&self, registration: &str) -> DomainResult<ExitReceipt> {
        let registration = registration.trim();

        let mut session = self
            .sessions
            .find_open_by_registration(registration)
            .await?
            .ok_or_else(|| DomainError::UnknownVehicle(registration.to_string()))?;

        let exit_time = self.clock.now();

        let visit_count = self.sessions.count_for_registration(registration).await?;
        let discount = visit_count > 1;

        let price = self
            .fare
            .compute(session.entry_time, exit_time, session.spot.category, discount)?;

        session.close(exit_time, price);
        self.sessions.update(session.clone()).await?;

        // The session is durably closed; the spot can go back to the pool
        self.spots.set_availability(session.spot.id, true).await?;

        let discount_applied = discount && price > Decimal::ZERO;

        info!(
            session_id = session.id,
            spot_id = session.spot.id,
            registration,
            price = %session.price,
            discount_applied,
            "Vehicle released"
        );

        Ok(ExitReceipt {
            session,
            discount_applied,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────
