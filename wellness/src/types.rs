//! Guest profile types for wellness calculations.

use serde::{Deserialize, Serialize};

/// Guest gender, as used by the basal metabolic rate formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male profile constant.
    Male,
    /// Female profile constant.
    Female,
}

/// A guest profile for wellness calculations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Height in meters.
    pub height_m: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Age in years.
    pub age_years: u32,
    /// Gender for the metabolic formula.
    pub gender: Gender,
}

impl Guest {
    /// Create a guest profile.
    #[must_use]
    pub const fn new(height_m: f64, weight_kg: f64, age_years: u32, gender: Gender) -> Self {
        Self {
            height_m,
            weight_kg,
            age_years,
            gender,
        }
    }
}
