//! Error taxonomy for the booking workflow.
//!
//! Each collaborator signals failure with its own error type; the workflow
//! wraps them transparently so callers can still distinguish a business
//! rejection (a deliberate domain failure such as a price ceiling) from an
//! infrastructure fault.

use crate::types::{ConfirmationId, Money, ReservationId, RoomId};
use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Failures signalled by the payment gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Business-rule rejection: the charge exceeds the gateway's configured
    /// ceiling.
    #[error("charge of {amount} exceeds the gateway ceiling of {ceiling}")]
    AmountTooHigh {
        /// Amount the workflow attempted to charge.
        amount: Money,
        /// Ceiling configured on the gateway.
        ceiling: Money,
    },

    /// Business-rule rejection: the gateway declined the charge.
    #[error("payment declined: {reason}")]
    Declined {
        /// Reason reported by the gateway.
        reason: String,
    },

    /// Infrastructure fault: the gateway could not be reached.
    #[error("payment gateway unavailable: {message}")]
    Gateway {
        /// Transport-level detail.
        message: String,
    },
}

impl PaymentError {
    /// Returns `true` for deliberate domain failures, as opposed to
    /// transport faults.
    #[must_use]
    pub const fn is_business_rejection(&self) -> bool {
        matches!(self, Self::AmountTooHigh { .. } | Self::Declined { .. })
    }
}

/// Failures signalled by the room inventory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The room cannot host the requested stay.
    #[error("room {room_id} is not available for the requested stay")]
    Unavailable {
        /// Room that was requested.
        room_id: RoomId,
    },

    /// An overlapping reservation already holds the room.
    #[error("room {room_id} is already reserved for an overlapping stay")]
    Conflict {
        /// Room that was requested.
        room_id: RoomId,
    },

    /// The room does not exist in the inventory.
    #[error("unknown room {room_id}")]
    UnknownRoom {
        /// Room that was requested.
        room_id: RoomId,
    },

    /// No reservation is held under the given handle.
    #[error("unknown reservation {reservation_id}")]
    UnknownReservation {
        /// Handle that was presented.
        reservation_id: ReservationId,
    },

    /// Infrastructure fault in the inventory backend.
    #[error("inventory backend failure: {message}")]
    Backend {
        /// Backend detail.
        message: String,
    },
}

/// Failures signalled by the booking store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The booking record could not be persisted.
    #[error("failed to persist booking: {message}")]
    Persistence {
        /// Storage detail.
        message: String,
    },

    /// No record exists for the given confirmation id.
    #[error("no booking found for confirmation id {confirmation_id}")]
    NotFound {
        /// Confirmation id that was looked up.
        confirmation_id: ConfirmationId,
    },
}

/// Failure signalled by the notification sender.
///
/// Never fails the overall booking; the workflow records it and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// The confirmation message could not be delivered.
    #[error("failed to deliver confirmation: {message}")]
    Delivery {
        /// Delivery detail.
        message: String,
    },
}

/// Errors surfaced to callers of the booking workflow.
///
/// Collaborator failures are wrapped transparently — no translation — so a
/// caller can match on the collaborator's own error type and tell a business
/// rejection from an infrastructure fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Caller error: the request violated a precondition.
    #[error("invalid booking request: {reason}")]
    InvalidRequest {
        /// Violated precondition.
        reason: String,
    },

    /// Payment failure, propagated unchanged from the gateway.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Inventory failure, propagated unchanged.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Persistence failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BookingError {
    /// Returns `true` if the failure is a deliberate domain rejection rather
    /// than an infrastructure fault or caller error.
    #[must_use]
    pub const fn is_business_rejection(&self) -> bool {
        match self {
            Self::Payment(payment) => payment.is_business_rejection(),
            Self::Inventory(inventory) => matches!(
                inventory,
                InventoryError::Unavailable { .. } | InventoryError::Conflict { .. }
            ),
            Self::InvalidRequest { .. } | Self::Store(_) => false,
        }
    }
}
