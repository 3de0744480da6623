//! Booking metrics for observability.
//!
//! Counters are described once at startup and recorded through
//! [`BookingMetrics`] so call sites stay one-liners.

use metrics::{counter, describe_counter};

/// Register metric descriptions with the installed recorder.
///
/// Call once at startup, after installing an exporter.
pub fn describe_metrics() {
    describe_counter!(
        "bookings_completed_total",
        "Total number of bookings that reached the persisted stage"
    );
    describe_counter!(
        "bookings_aborted_total",
        "Total number of bookings aborted before persistence"
    );
    describe_counter!(
        "bookings_cancelled_total",
        "Total number of persisted bookings cancelled"
    );
    describe_counter!(
        "booking_payments_total",
        "Total number of prepayments collected"
    );
    describe_counter!(
        "booking_notification_failures_total",
        "Total number of confirmation deliveries that failed after persistence"
    );
}

/// Booking metrics recorder.
pub struct BookingMetrics;

impl BookingMetrics {
    /// Record a booking that reached the persisted stage.
    pub fn record_completed() {
        counter!("bookings_completed_total").increment(1);
    }

    /// Record a booking aborted before persistence.
    pub fn record_aborted() {
        counter!("bookings_aborted_total").increment(1);
    }

    /// Record a cancelled booking.
    pub fn record_cancelled() {
        counter!("bookings_cancelled_total").increment(1);
    }

    /// Record a collected prepayment.
    pub fn record_payment() {
        counter!("booking_payments_total").increment(1);
    }

    /// Record a failed confirmation delivery.
    ///
    /// This counter is the side channel for notification failures: the
    /// booking itself stands, but the miss is visible to operators.
    pub fn record_notification_failure() {
        counter!("booking_notification_failures_total").increment(1);
    }
}
