//! Domain types for the booking workflow.
//!
//! Value objects and entities: identifiers, money, stay dates, the booking
//! request consumed by the workflow and the record it persists.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a bookable room.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a `RoomId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque transaction identifier returned by the payment gateway.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a `TransactionId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reservation handle returned by the room inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(String);

impl ReservationId {
    /// Create a `ReservationId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque confirmation identifier minted when a booking record is persisted.
///
/// This is the durable identifier a caller holds after a successful booking.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationId(String);

impl ConfirmationId {
    /// Create a `ConfirmationId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Monetary amount in cents.
///
/// Stored as integral cents to keep pricing arithmetic exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Create an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units.
    #[must_use]
    pub const fn from_major(units: u64) -> Self {
        Self(units * 100)
    }

    /// Zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply the amount by a unitless factor, saturating on overflow.
    #[must_use]
    pub const fn scale(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Stay dates
// ============================================================================

/// A half-open stay interval: nights from `check_in` (inclusive) to
/// `check_out` (exclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date. Must be strictly after `check_in` for a valid stay.
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Create a stay interval. Validity is checked by the workflow, not here.
    #[must_use]
    pub const fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Whether the departure is strictly after the arrival.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.check_out > self.check_in
    }

    /// Number of nights in the stay. Zero for an unordered interval.
    #[must_use]
    pub fn nights(&self) -> u64 {
        let days = self
            .check_out
            .signed_duration_since(self.check_in)
            .num_days();
        u64::try_from(days).unwrap_or(0)
    }

    /// Whether two stays overlap (half-open interval semantics: back-to-back
    /// stays sharing a turnover day do not overlap).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}

// ============================================================================
// Request and record
// ============================================================================

/// A booking request, created by the caller and consumed exactly once by
/// [`crate::workflow::BookingWorkflow::make_booking`].
///
/// Immutable once constructed; it carries no mutable state and is not
/// retried automatically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Room to book.
    pub room_id: RoomId,
    /// Stay interval.
    pub dates: StayDates,
    /// Number of occupants.
    pub guests: u32,
    /// Whether payment must be collected before the room is committed.
    pub prepay: bool,
}

impl BookingRequest {
    /// Create a booking request.
    #[must_use]
    pub fn new(
        room_id: impl Into<RoomId>,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        prepay: bool,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            dates: StayDates::new(check_in, check_out),
            guests,
            prepay,
        }
    }

    /// Check the request shape: dates ordered, occupancy positive.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BookingError::InvalidRequest`] naming the
    /// violated precondition.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.dates.is_ordered() {
            return Err(crate::error::BookingError::InvalidRequest {
                reason: "check-out must be strictly after check-in".to_string(),
            });
        }
        if self.guests == 0 {
            return Err(crate::error::BookingError::InvalidRequest {
                reason: "occupancy must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// A bookable room as reported by the inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Maximum number of occupants.
    pub capacity: u32,
}

/// The finalized booking record persisted by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The originating request.
    pub request: BookingRequest,
    /// Total price quoted for the stay.
    pub total: Money,
    /// Gateway transaction, present only for prepaid bookings.
    pub transaction_id: Option<TransactionId>,
    /// Inventory reservation backing this booking.
    pub reservation_id: ReservationId,
    /// When the record was finalized.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workflow stages
// ============================================================================

/// Progress of a single booking through the workflow.
///
/// `Validated → (Paid | SkippedPayment) → Reserved → Persisted →
/// (Notified | NotifyFailed)`. Persistence is the durability boundary:
/// a booking that reached `Persisted` stands even if notification fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStage {
    /// Request shape checked.
    Validated,
    /// Prepayment collected.
    Paid,
    /// Payment step skipped for a pay-later request.
    SkippedPayment,
    /// Room reserved in inventory.
    Reserved,
    /// Booking record persisted; the booking now stands.
    Persisted,
    /// Confirmation delivered.
    Notified,
    /// Confirmation delivery failed; the booking still stands.
    NotifyFailed,
}

impl BookingStage {
    /// Whether the booking has crossed the durability boundary.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Persisted | Self::Notified | Self::NotifyFailed)
    }
}

impl fmt::Display for BookingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validated => write!(f, "validated"),
            Self::Paid => write!(f, "paid"),
            Self::SkippedPayment => write!(f, "skipped_payment"),
            Self::Reserved => write!(f, "reserved"),
            Self::Persisted => write!(f, "persisted"),
            Self::Notified => write!(f, "notified"),
            Self::NotifyFailed => write!(f, "notify_failed"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nights_counts_the_half_open_interval() {
        let dates = StayDates::new(date(2020, 1, 1), date(2020, 1, 5));
        assert_eq!(dates.nights(), 4);
    }

    #[test]
    fn unordered_dates_have_zero_nights() {
        let dates = StayDates::new(date(2020, 1, 5), date(2020, 1, 1));
        assert!(!dates.is_ordered());
        assert_eq!(dates.nights(), 0);
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        let first = StayDates::new(date(2020, 1, 1), date(2020, 1, 5));
        let second = StayDates::new(date(2020, 1, 5), date(2020, 1, 8));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn nested_stays_overlap() {
        let outer = StayDates::new(date(2020, 1, 1), date(2020, 1, 10));
        let inner = StayDates::new(date(2020, 1, 3), date(2020, 1, 4));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn money_display_pads_cents() {
        assert_eq!(Money::from_cents(40_000).to_string(), "400.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn money_scale_saturates() {
        assert_eq!(Money::from_cents(u64::MAX).scale(2), Money::from_cents(u64::MAX));
    }

    #[test]
    fn request_validation_rejects_inverted_dates() {
        let request = BookingRequest::new("1", date(2020, 1, 5), date(2020, 1, 1), 2, false);
        assert!(request.validate().is_err());
    }

    #[test]
    fn request_validation_rejects_zero_occupancy() {
        let request = BookingRequest::new("1", date(2020, 1, 1), date(2020, 1, 5), 0, false);
        assert!(request.validate().is_err());
    }

    #[test]
    fn settled_stages_are_terminal_successes() {
        assert!(BookingStage::Persisted.is_settled());
        assert!(BookingStage::Notified.is_settled());
        assert!(BookingStage::NotifyFailed.is_settled());
        assert!(!BookingStage::Reserved.is_settled());
    }
}
