//! Booking collaborators.
//!
//! This module defines traits for the four external dependencies of the
//! booking workflow. These traits enable dependency injection and make the
//! workflow testable.
//!
//! # Architecture
//!
//! Providers are **interfaces**, not implementations. The workflow depends
//! on these traits, and the runtime provides concrete implementations —
//! real services in production, recording mocks under test. None of them is
//! ever reached through a global.
//!
//! The workflow invokes them in a fixed order, each call a potential abort
//! point:
//!
//! ```text
//! PaymentGateway ──► RoomInventory ──► BookingStore ──► NotificationSender
//!  (prepay only)        reserve           persist          best-effort
//! ```
//!
//! Retry and timeout policy, where wanted, belongs to the individual
//! implementations behind these traits, not to the workflow.

pub mod inventory;
pub mod notification;
pub mod payment;
pub mod store;

pub use inventory::RoomInventory;
pub use notification::NotificationSender;
pub use payment::PaymentGateway;
pub use store::BookingStore;
