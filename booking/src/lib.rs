//! # Innkeeper Booking
//!
//! The hotel booking workflow: given a booking request, compute the total
//! price, collect prepayment when requested, reserve the room, persist the
//! booking and send a confirmation — in that order, aborting on the first
//! failure.
//!
//! ## Architecture
//!
//! The workflow depends on four collaborator traits (payment gateway, room
//! inventory, booking store, notification sender) injected through a
//! [`BookingEnvironment`]. Nothing is reached through a global, so real
//! services and recording test doubles are interchangeable.
//!
//! ```text
//! validate → price → (pay | skip) → reserve → persist → notify
//! ```
//!
//! Partial-failure semantics:
//!
//! - A payment failure aborts the booking with **zero** downstream side
//!   effects, and the gateway's error reaches the caller unchanged.
//! - A pay-later request never touches the payment gateway.
//! - Persistence is the durability boundary: a notification failure after
//!   it is reported (log + metrics counter) but the confirmation id is
//!   still returned.
//!
//! ## Example
//!
//! ```
//! use innkeeper_booking::mocks::{
//!     MockBookingStore, MockNotificationSender, MockPaymentGateway, MockRoomInventory,
//! };
//! use innkeeper_booking::{BookingEnvironment, BookingRequest, BookingWorkflow, RatePlan};
//! use innkeeper_booking::types::Money;
//! use innkeeper_core::environment::SystemClock;
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = BookingEnvironment::new(
//!     MockPaymentGateway::new(),
//!     MockRoomInventory::new().with_room("101", 2),
//!     MockBookingStore::new(),
//!     MockNotificationSender::new(),
//!     SystemClock,
//! );
//! let workflow = BookingWorkflow::new(env, RatePlan::new(Money::from_major(50)));
//!
//! let request = BookingRequest::new(
//!     "101",
//!     NaiveDate::from_ymd_opt(2026, 8, 1).ok_or("bad date")?,
//!     NaiveDate::from_ymd_opt(2026, 8, 5).ok_or("bad date")?,
//!     2,
//!     false,
//! );
//! let confirmation_id = workflow.make_booking(request).await?;
//! # let _ = confirmation_id;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod config;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod pricing;
pub mod providers;
pub mod types;
pub mod workflow;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use config::BookingConfig;
pub use environment::BookingEnvironment;
pub use error::{BookingError, Result};
pub use pricing::RatePlan;
pub use types::{BookingRecord, BookingRequest, BookingStage, ConfirmationId};
pub use workflow::BookingWorkflow;
