//! The booking workflow.
//!
//! A single `make_booking` call is a linear sequence of collaborator calls,
//! each a potential abort point:
//!
//! ```text
//! validate → price → (pay | skip) → reserve → persist → notify
//! ```
//!
//! Persistence is the durability boundary. Everything before it aborts the
//! booking on failure; a notification failure after it is reported but does
//! not fail the call. The workflow holds no shared mutable state and is safe
//! to invoke concurrently for distinct requests; conflict detection for
//! racing reservations belongs to the inventory.

use crate::environment::BookingEnvironment;
use crate::error::{Result, StoreError};
use crate::metrics::BookingMetrics;
use crate::pricing::RatePlan;
use crate::providers::{BookingStore, NotificationSender, PaymentGateway, RoomInventory};
use crate::types::{BookingRecord, BookingRequest, BookingStage, ConfirmationId};
use innkeeper_core::environment::Clock;

/// Orchestrates payment, room allocation, persistence and notification for
/// a single booking request.
pub struct BookingWorkflow<P, I, S, N, C>
where
    P: PaymentGateway + Clone,
    I: RoomInventory + Clone,
    S: BookingStore + Clone,
    N: NotificationSender + Clone,
    C: Clock + Clone,
{
    env: BookingEnvironment<P, I, S, N, C>,
    rates: RatePlan,
}

impl<P, I, S, N, C> BookingWorkflow<P, I, S, N, C>
where
    P: PaymentGateway + Clone,
    I: RoomInventory + Clone,
    S: BookingStore + Clone,
    N: NotificationSender + Clone,
    C: Clock + Clone,
{
    /// Create a workflow over the given environment and rate plan.
    #[must_use]
    pub const fn new(env: BookingEnvironment<P, I, S, N, C>, rates: RatePlan) -> Self {
        Self { env, rates }
    }

    /// Make a booking.
    ///
    /// Consumes the request exactly once and returns the confirmation id
    /// minted at persistence. Steps run in strict order and the first
    /// failure aborts the call; completed steps are not compensated.
    ///
    /// # Errors
    ///
    /// - [`crate::error::BookingError::InvalidRequest`] if the request shape
    ///   is invalid
    /// - [`crate::error::BookingError::Payment`] — the gateway's failure,
    ///   verbatim; for a prepaid request no reservation, persistence or
    ///   notification happens after it
    /// - [`crate::error::BookingError::Inventory`] if the room cannot be
    ///   reserved
    /// - [`crate::error::BookingError::Store`] if the finalized record
    ///   cannot be persisted
    ///
    /// A notification failure is **not** an error: the booking stands and
    /// the confirmation id is still returned.
    pub async fn make_booking(&self, request: BookingRequest) -> Result<ConfirmationId> {
        match self.run(request).await {
            Ok(confirmation_id) => {
                BookingMetrics::record_completed();
                Ok(confirmation_id)
            },
            Err(error) => {
                BookingMetrics::record_aborted();
                Err(error)
            },
        }
    }

    async fn run(&self, request: BookingRequest) -> Result<ConfirmationId> {
        request.validate()?;
        let mut stage = BookingStage::Validated;
        tracing::debug!(room_id = %request.room_id, stage = %stage, "Booking request accepted");

        let total = self.rates.quote(&request);

        let transaction_id = if request.prepay {
            let transaction_id = self.env.payments.pay(&request, total).await?;
            stage = BookingStage::Paid;
            BookingMetrics::record_payment();
            tracing::debug!(
                room_id = %request.room_id,
                transaction_id = %transaction_id,
                amount = %total,
                stage = %stage,
                "Prepayment collected"
            );
            Some(transaction_id)
        } else {
            stage = BookingStage::SkippedPayment;
            tracing::debug!(room_id = %request.room_id, stage = %stage, "Pay-later booking, payment skipped");
            None
        };

        let reservation_id = self
            .env
            .inventory
            .reserve(&request.room_id, request.dates, request.guests)
            .await?;
        stage = BookingStage::Reserved;
        tracing::debug!(
            room_id = %request.room_id,
            reservation_id = %reservation_id,
            stage = %stage,
            "Room reserved"
        );

        let record = BookingRecord {
            request: request.clone(),
            total,
            transaction_id,
            reservation_id,
            created_at: self.env.clock.now(),
        };
        let confirmation_id = self.env.store.save(record).await?;
        stage = BookingStage::Persisted;
        tracing::info!(
            confirmation_id = %confirmation_id,
            room_id = %request.room_id,
            amount = %total,
            stage = %stage,
            "Booking persisted"
        );

        // Best-effort from here on: the booking already stands.
        match self
            .env
            .notifier
            .send_confirmation(&confirmation_id, &request)
            .await
        {
            Ok(()) => {
                stage = BookingStage::Notified;
                tracing::debug!(confirmation_id = %confirmation_id, stage = %stage, "Confirmation sent");
            },
            Err(error) => {
                stage = BookingStage::NotifyFailed;
                BookingMetrics::record_notification_failure();
                tracing::warn!(
                    confirmation_id = %confirmation_id,
                    error = %error,
                    stage = %stage,
                    "Confirmation delivery failed; booking stands"
                );
            },
        }

        Ok(confirmation_id)
    }

    /// Cancel a persisted booking.
    ///
    /// Releases the room reservation, then deletes the record. Returns the
    /// deleted record.
    ///
    /// # Errors
    ///
    /// - [`crate::error::BookingError::Store`] with [`StoreError::NotFound`]
    ///   if no booking exists under the confirmation id
    /// - [`crate::error::BookingError::Inventory`] if the reservation cannot
    ///   be released
    pub async fn cancel_booking(&self, confirmation_id: &ConfirmationId) -> Result<BookingRecord> {
        let record = self
            .env
            .store
            .find(confirmation_id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                confirmation_id: confirmation_id.clone(),
            })?;

        self.env.inventory.release(&record.reservation_id).await?;
        let record = self.env.store.delete(confirmation_id).await?;
        BookingMetrics::record_cancelled();
        tracing::info!(
            confirmation_id = %confirmation_id,
            room_id = %record.request.room_id,
            "Booking cancelled"
        );
        Ok(record)
    }

    /// Total guest capacity over rooms that currently hold no reservation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BookingError::Inventory`] if the inventory
    /// cannot be read.
    pub async fn available_capacity(&self) -> Result<u32> {
        let rooms = self.env.inventory.available_rooms().await?;
        Ok(rooms.iter().map(|room| room.capacity).sum())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BookingError;
    use crate::mocks::{
        MockBookingStore, MockNotificationSender, MockPaymentGateway, MockRoomInventory,
    };
    use crate::types::Money;
    use chrono::NaiveDate;
    use innkeeper_testing::test_clock;

    type MockWorkflow = BookingWorkflow<
        MockPaymentGateway,
        MockRoomInventory,
        MockBookingStore,
        MockNotificationSender,
        innkeeper_testing::FixedClock,
    >;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workflow() -> MockWorkflow {
        let env = BookingEnvironment::new(
            MockPaymentGateway::new(),
            MockRoomInventory::new().with_room("1", 2),
            MockBookingStore::new(),
            MockNotificationSender::new(),
            test_clock(),
        );
        BookingWorkflow::new(env, RatePlan::new(Money::from_major(50)))
    }

    #[tokio::test]
    async fn inverted_dates_fail_validation_before_any_collaborator_call() {
        let workflow = workflow();
        let gateway = workflow.env.payments.clone();
        let inventory = workflow.env.inventory.clone();

        let request = BookingRequest::new("1", date(2020, 1, 5), date(2020, 1, 1), 2, true);
        let result = workflow.make_booking(request).await;

        assert!(matches!(result, Err(BookingError::InvalidRequest { .. })));
        assert_eq!(gateway.invocations(), 0);
        assert_eq!(inventory.reserve_invocations(), 0);
    }

    #[tokio::test]
    async fn zero_occupancy_fails_validation() {
        let workflow = workflow();
        let request = BookingRequest::new("1", date(2020, 1, 1), date(2020, 1, 5), 0, false);

        let result = workflow.make_booking(request).await;

        assert!(matches!(result, Err(BookingError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn persisted_record_carries_quote_and_timestamp() {
        let workflow = workflow();
        let store = workflow.env.store.clone();

        let request = BookingRequest::new("1", date(2020, 1, 1), date(2020, 1, 5), 2, false);
        workflow.make_booking(request).await.unwrap();

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total, Money::from_cents(40_000));
        assert_eq!(records[0].created_at, test_clock().now());
        assert!(records[0].transaction_id.is_none());
    }
}
