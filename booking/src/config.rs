//! Configuration for the booking service.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::pricing::RatePlan;
use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::env;

/// Default nightly rate in cents (50.00 per guest per night).
const DEFAULT_NIGHTLY_RATE_CENTS: u64 = 5_000;

/// Booking service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Nightly rate in cents, per guest per night.
    pub nightly_rate_cents: u64,
}

impl BookingConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `INNKEEPER_NIGHTLY_RATE_CENTS`; malformed or missing values
    /// fall back to the default rate.
    #[must_use]
    pub fn from_env() -> Self {
        let nightly_rate_cents = env::var("INNKEEPER_NIGHTLY_RATE_CENTS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_NIGHTLY_RATE_CENTS);

        Self { nightly_rate_cents }
    }

    /// The rate plan described by this configuration.
    #[must_use]
    pub const fn rate_plan(&self) -> RatePlan {
        RatePlan::new(Money::from_cents(self.nightly_rate_cents))
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            nightly_rate_cents: DEFAULT_NIGHTLY_RATE_CENTS,
        }
    }
}
