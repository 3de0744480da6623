//! Payment gateway trait.

use crate::error::PaymentError;
use crate::types::{BookingRequest, Money, TransactionId};

/// Payment gateway.
///
/// This trait abstracts over payment processors (Stripe, Adyen, a property
/// management system's folio charge, etc.).
pub trait PaymentGateway: Send + Sync {
    /// Collect payment for a booking.
    ///
    /// # Arguments
    ///
    /// - `request`: The booking the charge references
    /// - `amount`: Total amount to collect
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::AmountTooHigh`] or [`PaymentError::Declined`]
    /// for business-rule rejections, [`PaymentError::Gateway`] for transport
    /// faults. The workflow propagates whatever is returned here verbatim.
    fn pay(
        &self,
        request: &BookingRequest,
        amount: Money,
    ) -> impl std::future::Future<Output = Result<TransactionId, PaymentError>> + Send;
}
