//! Stay pricing.
//!
//! A pure function of the request: nightly rate × nights × occupants.
//! Kept outside the environment because it performs no I/O.

use crate::types::{BookingRequest, Money};
use serde::{Deserialize, Serialize};

/// Rate plan used to quote a stay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlan {
    nightly_rate: Money,
}

impl RatePlan {
    /// Create a rate plan with the given per-night, per-guest rate.
    #[must_use]
    pub const fn new(nightly_rate: Money) -> Self {
        Self { nightly_rate }
    }

    /// The per-night, per-guest rate.
    #[must_use]
    pub const fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    /// Quote the total price for a stay.
    #[must_use]
    pub fn quote(&self, request: &BookingRequest) -> Money {
        self.nightly_rate
            .scale(request.dates.nights())
            .scale(u64::from(request.guests))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quote_multiplies_rate_nights_and_guests() {
        let rates = RatePlan::new(Money::from_major(50));
        let request = BookingRequest::new("1", date(2020, 1, 1), date(2020, 1, 5), 2, true);

        // 50.00 * 4 nights * 2 guests
        assert_eq!(rates.quote(&request), Money::from_cents(40_000));
    }

    #[test]
    fn single_guest_single_night_pays_the_base_rate() {
        let rates = RatePlan::new(Money::from_major(50));
        let request = BookingRequest::new("7", date(2020, 3, 1), date(2020, 3, 2), 1, false);

        assert_eq!(rates.quote(&request), Money::from_major(50));
    }
}
