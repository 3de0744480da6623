//! # Innkeeper Testing
//!
//! Deterministic implementations of the environment traits, for tests.
//!
//! This crate provides:
//! - `FixedClock`: always returns the same instant
//! - `SequentialIdGenerator`: predictable ids (`bk-1`, `bk-2`, …)
//! - `test_clock()`: a conventional fixed clock shared by the test suites
//!
//! ## Example
//!
//! ```
//! use innkeeper_testing::{test_clock, mocks::SequentialIdGenerator};
//! use innkeeper_core::environment::{Clock, IdGenerator};
//!
//! let clock = test_clock();
//! assert_eq!(clock.now(), clock.now());
//!
//! let ids = SequentialIdGenerator::with_prefix("bk");
//! assert_eq!(ids.next_id(), "bk-1");
//! assert_eq!(ids.next_id(), "bk-2");
//! ```

use chrono::{DateTime, Utc};
use innkeeper_core::environment::Clock;

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use innkeeper_core::environment::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use innkeeper_testing::mocks::FixedClock;
    /// use innkeeper_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Sequential id generator for predictable identifiers
    ///
    /// Mints `<prefix>-1`, `<prefix>-2`, … so tests can assert on exact ids.
    /// Clones share the counter, matching how an environment hands the same
    /// generator to several collaborators.
    #[derive(Debug, Clone)]
    pub struct SequentialIdGenerator {
        prefix: String,
        counter: Arc<AtomicU64>,
    }

    impl SequentialIdGenerator {
        /// Create a generator with the given id prefix.
        #[must_use]
        pub fn with_prefix(prefix: &str) -> Self {
            Self {
                prefix: prefix.to_string(),
                counter: Arc::new(AtomicU64::new(0)),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::with_prefix("id")
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
            format!("{}-{n}", self.prefix)
        }
    }
}

pub use mocks::{FixedClock, SequentialIdGenerator};

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}
