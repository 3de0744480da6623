//! Front desk demo binary
//!
//! Drives the booking workflow end to end with mock collaborators: a
//! pay-later booking, a prepaid booking, a rejected prepayment, and a
//! cancellation, plus a wellness consultation for a guest.

use anyhow::Context;
use chrono::NaiveDate;
use innkeeper_booking::mocks::{
    MockBookingStore, MockNotificationSender, MockPaymentGateway, MockRoomInventory,
};
use innkeeper_booking::types::Money;
use innkeeper_booking::{BookingConfig, BookingEnvironment, BookingRequest, BookingWorkflow};
use innkeeper_core::environment::SystemClock;
use innkeeper_wellness::{bmi, DietPlanner, Gender, Guest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).context("invalid calendar date")
}

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "front_desk=debug,innkeeper_booking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    innkeeper_booking::metrics::describe_metrics();

    println!("=== Front Desk: Innkeeper Booking Workflow ===\n");

    // Collaborators: a gateway with a 300.00 ceiling, two rooms, in-memory
    // store and mail. Clones share state, so we keep handles for inspection.
    let gateway = MockPaymentGateway::rejecting_above(Money::from_major(300));
    let inventory = MockRoomInventory::new()
        .with_room("101", 2)
        .with_room("201", 4);
    let store = MockBookingStore::new();
    let notifier = MockNotificationSender::new();

    let env = BookingEnvironment::new(
        gateway.clone(),
        inventory.clone(),
        store.clone(),
        notifier.clone(),
        SystemClock,
    );
    let config = BookingConfig::from_env();
    let workflow = BookingWorkflow::new(env, config.rate_plan());

    println!(
        "Capacity before any booking: {} guests",
        workflow.available_capacity().await?
    );

    // Pay-later booking: the gateway is never touched.
    println!("\n>>> Booking room 101, pay on arrival");
    let pay_later = BookingRequest::new(
        "101",
        date(2026, 9, 1)?,
        date(2026, 9, 4)?,
        2,
        false,
    );
    let confirmation = workflow.make_booking(pay_later).await?;
    println!(
        "Confirmed: {confirmation} (gateway invocations: {})",
        gateway.invocations()
    );

    // Prepaid booking under the ceiling: one night, one guest.
    println!("\n>>> Booking room 201, prepaid");
    let prepaid = BookingRequest::new("201", date(2026, 9, 1)?, date(2026, 9, 2)?, 1, true);
    let prepaid_confirmation = workflow.make_booking(prepaid).await?;
    println!(
        "Confirmed: {prepaid_confirmation} (gateway invocations: {})",
        gateway.invocations()
    );

    // Prepaid booking over the ceiling: aborted with zero side effects.
    println!("\n>>> Booking room 201, prepaid, four guests for a week");
    let too_expensive = BookingRequest::new(
        "201",
        date(2026, 10, 1)?,
        date(2026, 10, 8)?,
        4,
        true,
    );
    match workflow.make_booking(too_expensive).await {
        Ok(id) => println!("Unexpectedly confirmed: {id}"),
        Err(error) => println!(
            "Rejected: {error} (business rejection: {})",
            error.is_business_rejection()
        ),
    }
    println!("Persisted bookings: {}", store.records().len());

    // Cancel the pay-later booking.
    println!("\n>>> Cancelling {confirmation}");
    let cancelled = workflow.cancel_booking(&confirmation).await?;
    println!(
        "Cancelled booking for room {} ({})",
        cancelled.request.room_id, cancelled.request.dates
    );
    println!(
        "Capacity after cancellation: {} guests",
        workflow.available_capacity().await?
    );

    // Wellness consultation at the spa desk.
    println!("\n>>> Wellness consultation");
    let guest = Guest::new(1.82, 75.0, 26, Gender::Male);
    let score = bmi::bmi(guest.weight_kg, guest.height_m)?;
    println!("Guest BMI: {score:.2}");
    let planner = DietPlanner::new(20, 30, 50)?;
    let plan = planner.calculate_diet(&guest)?;
    println!(
        "Daily plan: {} kcal — protein {}g, fat {}g, carbohydrate {}g",
        plan.calories, plan.protein_g, plan.fat_g, plan.carbohydrate_g
    );

    println!("\n=== Front Desk Demonstration Complete ===");
    Ok(())
}
