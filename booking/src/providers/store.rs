//! Booking store trait.

use crate::error::StoreError;
use crate::types::{BookingRecord, ConfirmationId};

/// Booking store.
///
/// Persists finalized booking records and mints the confirmation id the
/// caller holds afterwards. Persistence is the workflow's durability
/// boundary.
pub trait BookingStore: Send + Sync {
    /// Persist a finalized booking record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the record cannot be written.
    fn save(
        &self,
        record: BookingRecord,
    ) -> impl std::future::Future<Output = Result<ConfirmationId, StoreError>> + Send;

    /// Look up a persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the store cannot be read.
    fn find(
        &self,
        confirmation_id: &ConfirmationId,
    ) -> impl std::future::Future<Output = Result<Option<BookingRecord>, StoreError>> + Send;

    /// Delete a persisted record, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists under the id.
    fn delete(
        &self,
        confirmation_id: &ConfirmationId,
    ) -> impl std::future::Future<Output = Result<BookingRecord, StoreError>> + Send;
}
