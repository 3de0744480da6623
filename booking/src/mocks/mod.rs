//! Mock collaborator implementations for testing.
//!
//! Simple in-memory implementations of the provider traits. Every mock
//! records its invocations — counts and captured arguments — and exposes
//! them for assertions, so tests can state "the gateway saw zero calls"
//! or "the store was written exactly once" directly.
//!
//! Clones share interior state through `Arc<Mutex<…>>`, matching how an
//! environment hands a collaborator to the workflow while the test keeps
//! its own handle for verification.

use std::sync::{Mutex, MutexGuard};

pub mod inventory;
pub mod notification;
pub mod payment;
pub mod store;

pub use inventory::{MockRoomInventory, ReserveCall};
pub use notification::MockNotificationSender;
pub use payment::{MockPaymentGateway, PaymentCall};
pub use store::MockBookingStore;

/// Lock a mock's interior, recovering from poisoning.
///
/// A test that panicked elsewhere must still be able to read recorded calls.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
