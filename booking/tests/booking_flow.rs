//! Integration tests for the booking workflow.
//!
//! These tests verify the orchestration contract against recording mocks:
//! - Success path, prepaid and pay-later
//! - Payment rejection as a hard abort with zero side effects
//! - Persistence as the durability boundary (notification best-effort)
//! - Conflict detection at the inventory, including the documented
//!   no-compensation gap after a successful payment
//! - Cancellation and capacity queries

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use chrono::NaiveDate;
use innkeeper_booking::error::{InventoryError, PaymentError, StoreError};
use innkeeper_booking::mocks::{
    MockBookingStore, MockNotificationSender, MockPaymentGateway, MockRoomInventory,
};
use innkeeper_booking::types::Money;
use innkeeper_booking::{
    BookingEnvironment, BookingError, BookingRequest, BookingWorkflow, RatePlan,
};
use innkeeper_testing::{test_clock, FixedClock, SequentialIdGenerator};
use std::sync::Arc;

type MockWorkflow = BookingWorkflow<
    MockPaymentGateway,
    MockRoomInventory,
    MockBookingStore,
    MockNotificationSender,
    FixedClock,
>;

fn workflow_with(
    gateway: &MockPaymentGateway,
    inventory: &MockRoomInventory,
    store: &MockBookingStore,
    notifier: &MockNotificationSender,
) -> MockWorkflow {
    let env = BookingEnvironment::new(
        gateway.clone(),
        inventory.clone(),
        store.clone(),
        notifier.clone(),
        test_clock(),
    );
    BookingWorkflow::new(env, RatePlan::new(Money::from_major(50)))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Room "1", 2020-01-01 → 2020-01-05, 2 occupants: quotes to 400.00 at the
/// standard 50.00 nightly rate.
fn january_request(prepay: bool) -> BookingRequest {
    BookingRequest::new("1", date(2020, 1, 1), date(2020, 1, 5), 2, prepay)
}

fn sequential_store() -> MockBookingStore {
    MockBookingStore::with_id_generator(Arc::new(SequentialIdGenerator::with_prefix("bk")))
}

// ============================================================================
// Payment rejection: hard abort with zero side effects
// ============================================================================

#[tokio::test]
async fn prepaid_booking_aborts_when_price_exceeds_gateway_ceiling() {
    let gateway = MockPaymentGateway::rejecting_above(Money::from_major(300));
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let result = workflow.make_booking(january_request(true)).await;

    // The gateway's failure reaches the caller unchanged.
    let error = result.unwrap_err();
    assert!(matches!(
        error,
        BookingError::Payment(PaymentError::AmountTooHigh {
            amount,
            ceiling,
        }) if amount == Money::from_major(400) && ceiling == Money::from_major(300)
    ));
    assert!(error.is_business_rejection());

    // Zero side effects past the gateway.
    assert_eq!(gateway.invocations(), 1);
    assert_eq!(inventory.reserve_invocations(), 0);
    assert_eq!(store.save_invocations(), 0);
    assert_eq!(notifier.invocations(), 0);
}

#[tokio::test]
async fn gateway_outage_also_aborts_without_side_effects() {
    let gateway = MockPaymentGateway::unavailable();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let result = workflow.make_booking(january_request(true)).await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        BookingError::Payment(PaymentError::Gateway { .. })
    ));
    // An infrastructure fault is distinguishable from a business rejection.
    assert!(!error.is_business_rejection());
    assert_eq!(inventory.reserve_invocations(), 0);
    assert_eq!(store.save_invocations(), 0);
}

// ============================================================================
// Pay-later: the gateway is never touched
// ============================================================================

#[tokio::test]
async fn pay_later_booking_never_invokes_the_gateway() {
    // The gateway would reject anything — it must simply never be called.
    let gateway = MockPaymentGateway::rejecting_above(Money::zero());
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let confirmation_id = workflow
        .make_booking(january_request(false))
        .await
        .unwrap();

    assert_eq!(confirmation_id.as_str(), "bk-1");
    assert_eq!(gateway.invocations(), 0);
    assert_eq!(inventory.reserve_invocations(), 1);
    assert_eq!(store.save_invocations(), 1);

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].transaction_id.is_none());
}

// ============================================================================
// Prepaid success path
// ============================================================================

#[tokio::test]
async fn prepaid_booking_charges_reserves_and_persists_exactly_once() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let confirmation_id = workflow.make_booking(january_request(true)).await.unwrap();

    // Exactly one call each, with the captured charge matching the quote:
    // 50.00 * 4 nights * 2 guests.
    assert_eq!(gateway.invocations(), 1);
    assert_eq!(gateway.last_amount(), Some(Money::from_cents(40_000)));
    assert_eq!(inventory.reserve_invocations(), 1);
    assert_eq!(store.save_invocations(), 1);
    assert_eq!(notifier.invocations(), 1);

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].transaction_id.as_ref().map(|t| t.as_str()),
        Some("txn-1")
    );
    assert_eq!(records[0].total, Money::from_cents(40_000));
    assert_eq!(notifier.sent(), vec![confirmation_id]);
}

#[tokio::test]
async fn captured_reserve_arguments_match_the_request() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let request = january_request(true);
    workflow.make_booking(request.clone()).await.unwrap();

    let calls = inventory.reserve_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].room_id, request.room_id);
    assert_eq!(calls[0].dates, request.dates);
    assert_eq!(calls[0].guests, request.guests);
}

// ============================================================================
// Notification is best-effort
// ============================================================================

#[tokio::test]
async fn notification_failure_does_not_fail_the_booking() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::failing();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let confirmation_id = workflow.make_booking(january_request(true)).await.unwrap();

    // The step-6 confirmation id is returned untouched and the record stands.
    assert_eq!(confirmation_id.as_str(), "bk-1");
    assert_eq!(notifier.invocations(), 1);
    assert_eq!(store.records().len(), 1);
}

// ============================================================================
// Persistence is the durability boundary
// ============================================================================

#[tokio::test]
async fn persistence_failure_aborts_before_notification() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = MockBookingStore::failing();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let result = workflow.make_booking(january_request(true)).await;

    assert!(matches!(
        result,
        Err(BookingError::Store(StoreError::Persistence { .. }))
    ));
    assert_eq!(notifier.invocations(), 0);
    // The payment and reservation already happened; they are not compensated.
    assert_eq!(gateway.invocations(), 1);
    assert_eq!(inventory.active_reservations(), 1);
}

// ============================================================================
// Inventory conflicts and the no-compensation gap
// ============================================================================

#[tokio::test]
async fn second_prepaid_booking_for_the_same_stay_is_rejected_after_payment() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    workflow.make_booking(january_request(true)).await.unwrap();
    let second = workflow.make_booking(january_request(true)).await;

    assert!(matches!(
        second,
        Err(BookingError::Inventory(InventoryError::Conflict { .. }))
    ));
    // Both requests were charged; the second charge is not refunded when the
    // reservation fails afterwards. Pinning the gap keeps it deliberate.
    assert_eq!(gateway.invocations(), 2);
    assert_eq!(store.save_invocations(), 1);
    assert_eq!(notifier.invocations(), 1);
}

#[tokio::test]
async fn identical_requests_are_not_idempotent() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let first = workflow.make_booking(january_request(false)).await;
    let second = workflow.make_booking(january_request(false)).await;

    // No dedup in the workflow: the second attempt reaches the inventory and
    // is rejected there as a conflict.
    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(BookingError::Inventory(InventoryError::Conflict { .. }))
    ));
    assert_eq!(inventory.reserve_invocations(), 2);
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn distinct_stays_book_independently() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    workflow.make_booking(january_request(false)).await.unwrap();
    let follow_up = BookingRequest::new("1", date(2020, 1, 5), date(2020, 1, 8), 2, false);
    let second = workflow.make_booking(follow_up).await;

    assert!(second.is_ok());
    assert_eq!(store.records().len(), 2);
}

// ============================================================================
// Cancellation and capacity
// ============================================================================

#[tokio::test]
async fn cancelling_releases_the_room_for_rebooking() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let confirmation_id = workflow.make_booking(january_request(false)).await.unwrap();
    let cancelled = workflow.cancel_booking(&confirmation_id).await.unwrap();

    assert_eq!(cancelled.request, january_request(false));
    assert_eq!(inventory.active_reservations(), 0);
    assert!(store.records().is_empty());

    // The same stay can be booked again.
    let rebooked = workflow.make_booking(january_request(false)).await;
    assert!(rebooked.is_ok());
}

#[tokio::test]
async fn cancelling_an_unknown_booking_fails_with_not_found() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    let result = workflow
        .cancel_booking(&innkeeper_booking::ConfirmationId::new("bk-404"))
        .await;

    assert!(matches!(
        result,
        Err(BookingError::Store(StoreError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn available_capacity_tracks_reservations() {
    let gateway = MockPaymentGateway::new();
    let inventory = MockRoomInventory::new().with_room("1", 2).with_room("2", 4);
    let store = sequential_store();
    let notifier = MockNotificationSender::new();
    let workflow = workflow_with(&gateway, &inventory, &store, &notifier);

    assert_eq!(workflow.available_capacity().await.unwrap(), 6);

    workflow.make_booking(january_request(false)).await.unwrap();
    assert_eq!(workflow.available_capacity().await.unwrap(), 4);
}
