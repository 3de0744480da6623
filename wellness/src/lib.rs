//! # Innkeeper Wellness
//!
//! Guest wellness calculations for the spa and dining desks: BMI screening
//! and macronutrient diet planning.
//!
//! Everything here is a pure function of its inputs — no I/O, no clock, no
//! collaborators — so the module needs no environment and is safe to call
//! from any context.
//!
//! ## Example
//!
//! ```
//! use innkeeper_wellness::{bmi, DietPlanner, Gender, Guest};
//!
//! # fn example() -> Result<(), innkeeper_wellness::WellnessError> {
//! let guest = Guest::new(1.82, 75.0, 26, Gender::Male);
//! assert!(!bmi::is_diet_recommended(guest.weight_kg, guest.height_m)?);
//!
//! let planner = DietPlanner::new(20, 30, 50)?;
//! let plan = planner.calculate_diet(&guest)?;
//! assert_eq!(plan.calories, 2203);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bmi;
pub mod diet;
pub mod error;
pub mod types;

pub use diet::{DietPlan, DietPlanner};
pub use error::WellnessError;
pub use types::{Gender, Guest};
