//! Error types for wellness calculations.

use thiserror::Error;

/// Result type alias for wellness calculations.
pub type Result<T> = std::result::Result<T, WellnessError>;

/// Failures in wellness calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WellnessError {
    /// Height must be strictly positive to compute a BMI or a diet plan.
    #[error("height must be positive, got {height_m}")]
    NonPositiveHeight {
        /// Offending height in meters.
        height_m: f64,
    },

    /// A macronutrient split must total 100 percent.
    #[error("macronutrient split must total 100%, got {total}%")]
    InvalidSplit {
        /// Sum of the configured percentages.
        total: u32,
    },
}
