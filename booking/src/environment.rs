//! Booking environment.
//!
//! This module defines the environment type for dependency injection
//! into the booking workflow.

use crate::providers::{BookingStore, NotificationSender, PaymentGateway, RoomInventory};
use innkeeper_core::environment::Clock;

/// Booking environment.
///
/// Contains all external dependencies needed by the booking workflow.
/// Collaborators are injected here, never reached through globals, so
/// substitutable implementations (real or test doubles) can be swapped
/// without changing the workflow's code.
///
/// # Type Parameters
///
/// - `P`: Payment gateway
/// - `I`: Room inventory
/// - `S`: Booking store
/// - `N`: Notification sender
/// - `C`: Clock
#[derive(Clone)]
pub struct BookingEnvironment<P, I, S, N, C>
where
    P: PaymentGateway + Clone,
    I: RoomInventory + Clone,
    S: BookingStore + Clone,
    N: NotificationSender + Clone,
    C: Clock + Clone,
{
    /// Payment gateway.
    pub payments: P,

    /// Room inventory.
    pub inventory: I,

    /// Booking store.
    pub store: S,

    /// Notification sender.
    pub notifier: N,

    /// Clock for record timestamps.
    pub clock: C,
}

impl<P, I, S, N, C> BookingEnvironment<P, I, S, N, C>
where
    P: PaymentGateway + Clone,
    I: RoomInventory + Clone,
    S: BookingStore + Clone,
    N: NotificationSender + Clone,
    C: Clock + Clone,
{
    /// Create a new booking environment.
    #[must_use]
    pub const fn new(payments: P, inventory: I, store: S, notifier: N, clock: C) -> Self {
        Self {
            payments,
            inventory,
            store,
            notifier,
            clock,
        }
    }
}
