//! Notification sender trait.

use crate::error::NotificationError;
use crate::types::{BookingRequest, ConfirmationId};

/// Notification sender.
///
/// Delivers the booking confirmation after persistence. Delivery is
/// best-effort: the workflow reports a failure here but never rolls back or
/// fails the booking because of it.
pub trait NotificationSender: Send + Sync {
    /// Send a booking confirmation.
    ///
    /// # Arguments
    ///
    /// - `confirmation_id`: The durable identifier minted by the store
    /// - `request`: The originating request, for recipient context
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] if the message cannot be
    /// delivered.
    fn send_confirmation(
        &self,
        confirmation_id: &ConfirmationId,
        request: &BookingRequest,
    ) -> impl std::future::Future<Output = Result<(), NotificationError>> + Send;
}
