//! Interactive console shell.
//!
//! Presentation only: renders the menu, feeds validated input to the
//! parking service, and prints the structured receipts it returns.
//! Errors are reported per interaction and the loop continues.

use std::sync::Arc;

use tracing::error;

use super::input::{InputSource, MenuAction};
use crate::application::services::ParkingService;
use crate::domain::DomainResult;

pub struct ConsoleShell<I: InputSource> {
    service: Arc<ParkingService>,
    input: I,
}

impl<I: InputSource> ConsoleShell<I> {
    pub fn new(service: Arc<ParkingService>, input: I) -> Self {
        Self { service, input }
    }

    /// Run the menu loop until the user quits.
    pub async fn run(&mut self) -> DomainResult<()> {
        loop {
            println!();
            println!("Please select an option and press enter");
            println!("1 Park a vehicle");
            println!("2 Exit a vehicle");
            println!("3 Quit");

            let action = match self.input.read_action() {
                Ok(action) => action,
                Err(e) => {
                    println!("Incorrect input provided: {e}");
                    continue;
                }
            };

            match action {
                MenuAction::ParkVehicle => self.park_vehicle().await,
                MenuAction::ExitVehicle => self.exit_vehicle().await,
                MenuAction::Quit => {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    async fn park_vehicle(&mut self) {
        println!("Please select vehicle type from menu");
        println!("1 CAR");
        println!("2 BIKE");
        let category = match self.input.read_category() {
            Ok(category) => category,
            Err(e) => {
                println!("Incorrect input provided: {e}");
                return;
            }
        };

        println!("Please type the vehicle registration number and press enter");
        let registration = match self.input.read_registration() {
            Ok(registration) => registration,
            Err(e) => {
                println!("Incorrect input provided: {e}");
                return;
            }
        };

        match self.service.admit(category, &registration).await {
            Ok(receipt) => {
                if receipt.returning {
                    println!(
                        "Welcome back! As a regular customer you will get a 5% discount on exit"
                    );
                }
                println!("Please park your vehicle in spot number {}", receipt.session.spot.id);
                println!(
                    "Recorded in-time for vehicle {} is {}",
                    receipt.session.registration, receipt.session.entry_time
                );
            }
            Err(e) => {
                error!(registration = %registration, error = %e, "Unable to admit vehicle");
                println!("Unable to park the vehicle: {e}");
            }
        }
    }

    async fn exit_vehicle(&mut self) {
        println!("Please type the vehicle registration number and press enter");
        let registration = match self.input.read_registration() {
            Ok(registration) => registration,
            Err(e) => {
                println!("Incorrect input provided: {e}");
                return;
            }
        };

        match self.service.release(&registration).await {
            Ok(receipt) => {
                if receipt.discount_applied {
                    println!("A 5% regular-customer reduction has been applied");
                }
                println!("Please pay the parking fare: {}", receipt.session.price);
                if let Some(exit_time) = receipt.session.exit_time {
                    println!(
                        "Recorded out-time for vehicle {} is {}",
                        receipt.session.registration, exit_time
                    );
                }
            }
            Err(e) => {
                error!(registration = %registration, error = %e, "Unable to process exiting vehicle");
                println!("Unable to process the exit: {e}");
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::application::services::FareCalculator;
    use crate::domain::SessionRepository;
    use crate::infrastructure::storage::InMemoryStorage;
    use crate::interfaces::console::ConsoleInput;
    use crate::support::time::ManualClock;

    fn shell_over(
        script: &str,
        storage: Arc<InMemoryStorage>,
    ) -> ConsoleShell<ConsoleInput<Cursor<Vec<u8>>>> {
        let service = Arc::new(ParkingService::new(
            storage.clone(),
            storage,
            FareCalculator::default(),
            Arc::new(ManualClock::new(Utc::now())),
        ));
        ConsoleShell::new(
            service,
            ConsoleInput::new(Cursor::new(script.as_bytes().to_vec())),
        )
    }

    #[tokio::test]
    async fn park_then_quit_leaves_an_open_session() {
        let storage = Arc::new(InMemoryStorage::with_layout(1, 1));
        // park (car, AB-123-CD), then quit
        let mut shell = shell_over("1\n1\nAB-123-CD\n3\n", storage.clone());

        shell.run().await.unwrap();

        let session = storage
            .find_open_by_registration("AB-123-CD")
            .await
            .unwrap()
            .unwrap();
        assert!(session.is_open());
        assert!(!storage.spot(1).unwrap().available);
    }

    #[tokio::test]
    async fn park_and_immediate_exit_frees_the_spot() {
        let storage = Arc::new(InMemoryStorage::with_layout(1, 0));
        // park car AB-123-CD, exit it, quit
        let mut shell = shell_over("1\n1\nAB-123-CD\n2\nAB-123-CD\n3\n", storage.clone());

        shell.run().await.unwrap();

        assert!(storage
            .find_open_by_registration("AB-123-CD")
            .await
            .unwrap()
            .is_none());
        let session = storage.session(1).unwrap();
        assert!(!session.is_open());
        assert_eq!(session.price, Decimal::ZERO); // within the free period
        assert!(storage.spot(1).unwrap().available);
    }

    #[tokio::test]
    async fn invalid_selection_is_reported_and_loop_continues() {
        let storage = Arc::new(InMemoryStorage::with_layout(1, 0));
        // bad menu choice, then quit
        let mut shell = shell_over("9\n3\n", storage.clone());

        shell.run().await.unwrap();
        assert!(storage.spot(1).unwrap().available);
    }
}
