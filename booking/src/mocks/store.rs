//! Mock booking store for testing.

use crate::error::StoreError;
use crate::providers::BookingStore;
use crate::types::{BookingRecord, ConfirmationId};
use innkeeper_core::environment::{IdGenerator, UuidIdGenerator};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<ConfirmationId, BookingRecord>,
    save_invocations: usize,
}

/// In-memory booking store.
///
/// Mints confirmation ids through an injected [`IdGenerator`] — random
/// UUIDs by default, a sequential generator when a test wants to assert on
/// exact ids. `failing()` builds a store whose every write fails, for
/// persistence-failure paths.
#[derive(Clone)]
pub struct MockBookingStore {
    ids: Arc<dyn IdGenerator>,
    failing: bool,
    inner: Arc<Mutex<Inner>>,
}

impl MockBookingStore {
    /// Create a store minting UUID confirmation ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidIdGenerator))
    }

    /// Create a store minting ids from the given generator.
    #[must_use]
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            failing: false,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Create a store whose every write fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Number of `save` invocations seen, successful or not.
    #[must_use]
    pub fn save_invocations(&self) -> usize {
        super::lock(&self.inner).save_invocations
    }

    /// All persisted records, unordered.
    #[must_use]
    pub fn records(&self) -> Vec<BookingRecord> {
        super::lock(&self.inner).records.values().cloned().collect()
    }
}

impl Default for MockBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockBookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBookingStore")
            .field("failing", &self.failing)
            .field("records", &super::lock(&self.inner).records.len())
            .finish_non_exhaustive()
    }
}

impl BookingStore for MockBookingStore {
    fn save(
        &self,
        record: BookingRecord,
    ) -> impl Future<Output = Result<ConfirmationId, StoreError>> + Send {
        let failing = self.failing;
        let ids = Arc::clone(&self.ids);
        let inner = Arc::clone(&self.inner);

        async move {
            let mut guard = super::lock(&inner);
            guard.save_invocations += 1;

            if failing {
                return Err(StoreError::Persistence {
                    message: "simulated storage failure".to_string(),
                });
            }

            let confirmation_id = ConfirmationId::new(ids.next_id());
            guard.records.insert(confirmation_id.clone(), record);
            tracing::debug!(confirmation_id = %confirmation_id, "Mock booking persisted");
            Ok(confirmation_id)
        }
    }

    fn find(
        &self,
        confirmation_id: &ConfirmationId,
    ) -> impl Future<Output = Result<Option<BookingRecord>, StoreError>> + Send {
        let confirmation_id = confirmation_id.clone();
        let inner = Arc::clone(&self.inner);

        async move { Ok(super::lock(&inner).records.get(&confirmation_id).cloned()) }
    }

    fn delete(
        &self,
        confirmation_id: &ConfirmationId,
    ) -> impl Future<Output = Result<BookingRecord, StoreError>> + Send {
        let confirmation_id = confirmation_id.clone();
        let inner = Arc::clone(&self.inner);

        async move {
            super::lock(&inner)
                .records
                .remove(&confirmation_id)
                .ok_or(StoreError::NotFound { confirmation_id })
        }
    }
}
