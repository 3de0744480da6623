//! Macronutrient diet planning.
//!
//! Daily calories come from the Mifflin-St Jeor basal metabolic rate scaled
//! by a light activity factor; grams per macronutrient follow from the
//! configured caloric split at 4/9/4 kcal per gram of protein, fat and
//! carbohydrate.

use crate::error::{Result, WellnessError};
use crate::types::{Gender, Guest};
use serde::{Deserialize, Serialize};

/// Light-activity multiplier applied to the basal metabolic rate.
const ACTIVITY_FACTOR: f64 = 1.25;

/// Kilocalories per gram of protein.
const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Kilocalories per gram of fat.
const FAT_KCAL_PER_G: f64 = 9.0;
/// Kilocalories per gram of carbohydrate.
const CARBOHYDRATE_KCAL_PER_G: f64 = 4.0;

/// A daily diet plan for one guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Daily kilocalories.
    pub calories: u32,
    /// Daily protein in grams.
    pub protein_g: u32,
    /// Daily fat in grams.
    pub fat_g: u32,
    /// Daily carbohydrate in grams.
    pub carbohydrate_g: u32,
}

/// Diet planner configured with a macronutrient split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlanner {
    protein_pct: u32,
    fat_pct: u32,
    carbohydrate_pct: u32,
}

impl DietPlanner {
    /// Create a planner with the given caloric split in percent.
    ///
    /// # Errors
    ///
    /// Returns [`WellnessError::InvalidSplit`] unless the percentages total
    /// exactly 100.
    pub const fn new(protein_pct: u32, fat_pct: u32, carbohydrate_pct: u32) -> Result<Self> {
        let total = protein_pct + fat_pct + carbohydrate_pct;
        if total != 100 {
            return Err(WellnessError::InvalidSplit { total });
        }
        Ok(Self {
            protein_pct,
            fat_pct,
            carbohydrate_pct,
        })
    }

    /// Calculate the daily diet plan for a guest.
    ///
    /// # Errors
    ///
    /// Returns [`WellnessError::NonPositiveHeight`] if the guest's height is
    /// zero or negative.
    pub fn calculate_diet(&self, guest: &Guest) -> Result<DietPlan> {
        if guest.height_m <= 0.0 {
            return Err(WellnessError::NonPositiveHeight {
                height_m: guest.height_m,
            });
        }

        // Truncation mirrors serving whole units; values stay far below u32::MAX.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let calories = (basal_metabolic_rate(guest) * ACTIVITY_FACTOR) as u32;

        Ok(DietPlan {
            calories,
            protein_g: grams(calories, self.protein_pct, PROTEIN_KCAL_PER_G),
            fat_g: grams(calories, self.fat_pct, FAT_KCAL_PER_G),
            carbohydrate_g: grams(calories, self.carbohydrate_pct, CARBOHYDRATE_KCAL_PER_G),
        })
    }
}

/// Mifflin-St Jeor basal metabolic rate in kilocalories per day.
fn basal_metabolic_rate(guest: &Guest) -> f64 {
    let height_cm = guest.height_m * 100.0;
    let base =
        10.0 * guest.weight_kg + 6.25 * height_cm - 5.0 * f64::from(guest.age_years);
    match guest.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

fn grams(calories: u32, pct: u32, kcal_per_gram: f64) -> u32 {
    // Truncation mirrors serving whole grams; values stay far below u32::MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let grams = (f64::from(calories) * f64::from(pct) / 100.0 / kcal_per_gram) as u32;
    grams
}
