//! Body mass index screening.

use crate::error::{Result, WellnessError};
use crate::types::Guest;

/// BMI at or above this threshold triggers a diet recommendation.
pub const DIET_RECOMMENDATION_THRESHOLD: f64 = 25.0;

/// Compute the body mass index for a weight and height.
///
/// # Errors
///
/// Returns [`WellnessError::NonPositiveHeight`] if `height_m` is zero or
/// negative.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    if height_m <= 0.0 {
        return Err(WellnessError::NonPositiveHeight { height_m });
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Whether a diet is recommended for the given measurements.
///
/// # Errors
///
/// Returns [`WellnessError::NonPositiveHeight`] if `height_m` is zero or
/// negative.
pub fn is_diet_recommended(weight_kg: f64, height_m: f64) -> Result<bool> {
    Ok(bmi(weight_kg, height_m)? >= DIET_RECOMMENDATION_THRESHOLD)
}

/// BMI scores for a group of guests, rounded to two decimals, in input order.
///
/// # Errors
///
/// Returns [`WellnessError::NonPositiveHeight`] if any guest has a
/// non-positive height.
pub fn bmi_scores(guests: &[Guest]) -> Result<Vec<f64>> {
    guests
        .iter()
        .map(|guest| {
            let score = bmi(guest.weight_kg, guest.height_m)?;
            Ok((score * 100.0).round() / 100.0)
        })
        .collect()
}

/// The guest with the highest BMI, or `None` for an empty group.
///
/// # Errors
///
/// Returns [`WellnessError::NonPositiveHeight`] if any guest has a
/// non-positive height.
pub fn worst_bmi(guests: &[Guest]) -> Result<Option<&Guest>> {
    let mut worst: Option<(&Guest, f64)> = None;
    for guest in guests {
        let score = bmi(guest.weight_kg, guest.height_m)?;
        if worst.is_none_or(|(_, best)| score > best) {
            worst = Some((guest, score));
        }
    }
    Ok(worst.map(|(guest, _)| guest))
}
