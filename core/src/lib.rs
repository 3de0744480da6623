//! # Innkeeper Core
//!
//! Shared environment traits for the Innkeeper hotel platform.
//!
//! Every external dependency of a workflow is abstracted behind a trait and
//! injected via an environment struct, never reached through a global. This
//! crate holds the traits that more than one domain crate needs, together
//! with their production implementations.
//!
//! ## Core Concepts
//!
//! - **Clock**: time as an injected dependency, so workflows are
//!   deterministic under test
//! - **IdGenerator**: opaque identifier minting, so persisted records get
//!   predictable ids in tests and UUIDs in production
//!
//! ## Example
//!
//! ```
//! use innkeeper_core::environment::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let started_at = clock.now();
//! assert!(clock.now() >= started_at);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

/// Environment module - dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via an environment parameter. Domain-specific ports (payment, inventory,
/// storage, mail) live next to their domain; the traits here are the ones
/// every domain shares.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeeper_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// assert!(clock.now() >= now);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Identifier generator - abstracts id minting for testability
    ///
    /// Stores and inventories mint opaque identifiers (confirmation ids,
    /// reservation handles). Production uses random UUIDs; tests swap in a
    /// sequential generator so assertions can name exact ids.
    pub trait IdGenerator: Send + Sync {
        /// Mint the next opaque identifier.
        fn next_id(&self) -> String;
    }

    /// Production id generator backed by random v4 UUIDs.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct UuidIdGenerator;

    impl IdGenerator for UuidIdGenerator {
        fn next_id(&self) -> String {
            uuid::Uuid::new_v4().to_string()
        }
    }
}
