//! End-to-end parking flows against the in-memory storage, with a
//! manual clock simulating elapsed time.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use parklot::application::services::{FareCalculator, ParkingService};
use parklot::domain::{DomainError, VehicleCategory};
use parklot::infrastructure::storage::InMemoryStorage;
use parklot::support::time::ManualClock;

fn build_lot(car_spots: u32, bike_spots: u32) -> (ParkingService, Arc<InMemoryStorage>, Arc<ManualClock>) {
    let storage = Arc::new(InMemoryStorage::with_layout(car_spots, bike_spots));
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let service = ParkingService::new(
        storage.clone(),
        storage.clone(),
        FareCalculator::default(),
        clock.clone(),
    );
    (service, storage, clock)
}

#[tokio::test]
async fn one_hour_car_stay_bills_the_hourly_rate_and_frees_the_spot() {
    let (service, storage, clock) = build_lot(3, 2);

    let admitted = service
        .admit(VehicleCategory::Car, "AB-123-CD")
        .await
        .unwrap();
    assert_eq!(admitted.session.spot.id, 1);
    assert!(!storage.spot(1).unwrap().available);

    clock.advance(Duration::minutes(60));
    let receipt = service.release("AB-123-CD").await.unwrap();

    assert_eq!(receipt.session.price, Decimal::new(150, 2));
    assert!(!receipt.discount_applied);
    assert!(storage.spot(1).unwrap().available);

    // The persisted session carries the exit stamp and price
    let stored = storage.session(receipt.session.id).unwrap();
    assert!(!stored.is_open());
    assert_eq!(stored.duration(), Some(Duration::minutes(60)));
    assert_eq!(stored.price, Decimal::new(150, 2));
}

#[tokio::test]
async fn forty_five_minute_stay_bills_three_quarters_of_the_rate() {
    let (service, _, clock) = build_lot(1, 0);

    service.admit(VehicleCategory::Car, "CD-456-EF").await.unwrap();
    clock.advance(Duration::minutes(45));

    let receipt = service.release("CD-456-EF").await.unwrap();
    // 0.75 * 1.50 = 1.125, truncated down to 1.12
    assert_eq!(receipt.session.price, Decimal::new(112, 2));
}

#[tokio::test]
async fn stay_within_the_free_period_costs_nothing() {
    let (service, _, clock) = build_lot(1, 1);

    service.admit(VehicleCategory::Bike, "BK-789").await.unwrap();
    clock.advance(Duration::minutes(30));

    let receipt = service.release("BK-789").await.unwrap();
    assert_eq!(receipt.session.price, Decimal::ZERO);
    assert!(!receipt.discount_applied);
}

#[tokio::test]
async fn repeat_customer_pays_ninety_five_percent_on_the_second_stay() {
    let (service, _, clock) = build_lot(1, 0);

    // First stay, full price
    service.admit(VehicleCategory::Car, "AB-123-CD").await.unwrap();
    clock.advance(Duration::minutes(60));
    let first = service.release("AB-123-CD").await.unwrap();
    assert_eq!(first.session.price, Decimal::new(150, 2));
    assert!(!first.discount_applied);

    // Second stay, 5% off: 1.50 * 0.95 = 1.425 -> 1.42
    let readmitted = service
        .admit(VehicleCategory::Car, "AB-123-CD")
        .await
        .unwrap();
    assert!(readmitted.returning);

    clock.advance(Duration::minutes(60));
    let second = service.release("AB-123-CD").await.unwrap();
    assert!(second.discount_applied);
    assert_eq!(second.session.price, Decimal::new(142, 2));
}

#[tokio::test]
async fn lot_fills_and_recovers_per_category() {
    let (service, _, clock) = build_lot(1, 1);

    service.admit(VehicleCategory::Car, "CAR-1").await.unwrap();

    // Car side is full; the bike side still admits
    let err = service.admit(VehicleCategory::Car, "CAR-2").await.unwrap_err();
    assert!(matches!(err, DomainError::NoSpotAvailable(VehicleCategory::Car)));
    service.admit(VehicleCategory::Bike, "BIKE-1").await.unwrap();

    // After the car leaves, its spot is reusable
    clock.advance(Duration::minutes(10));
    service.release("CAR-1").await.unwrap();
    let receipt = service.admit(VehicleCategory::Car, "CAR-2").await.unwrap();
    assert_eq!(receipt.session.spot.id, 1);
}

#[tokio::test]
async fn sessions_are_independent_per_vehicle() {
    let (service, storage, clock) = build_lot(2, 0);

    service.admit(VehicleCategory::Car, "AA-111").await.unwrap();
    clock.advance(Duration::minutes(15));
    service.admit(VehicleCategory::Car, "BB-222").await.unwrap();

    clock.advance(Duration::minutes(45));

    // AA parked 60 min, BB parked 45 min
    let first = service.release("AA-111").await.unwrap();
    let second = service.release("BB-222").await.unwrap();
    assert_eq!(first.session.price, Decimal::new(150, 2));
    assert_eq!(second.session.price, Decimal::new(112, 2));

    assert!(storage.spot(1).unwrap().available);
    assert!(storage.spot(2).unwrap().available);
}

#[tokio::test]
async fn release_requires_an_open_session() {
    let (service, _, clock) = build_lot(1, 0);

    let err = service.release("GHOST").await.unwrap_err();
    assert!(matches!(err, DomainError::UnknownVehicle(_)));

    // A vehicle that already left cannot be released twice
    service.admit(VehicleCategory::Car, "AA-111").await.unwrap();
    clock.advance(Duration::minutes(5));
    service.release("AA-111").await.unwrap();

    let err = service.release("AA-111").await.unwrap_err();
    assert!(matches!(err, DomainError::UnknownVehicle(_)));
}
