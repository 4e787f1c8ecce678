//! Body composition estimation
//!
//! Durnin-Womersley body density from the four-skinfold sum, Siri's equation
//! for body-fat percent, and the derived lean mass. A plausibility gate
//! discards estimates outside the believable human range instead of clamping
//! them: a clamped value would read as a measurement when it is actually a
//! methodology failure (wrong sites, caliper error, population mismatch).

use rust_decimal::Decimal;
use tracing::debug;

use crate::patient::Sex;

// ============================================================================
// Durnin-Womersley Coefficients
// ============================================================================

/// Coefficient pair for the density regression: density = intercept − slope × log10(sum4)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityCoefficients {
    pub intercept: f64,
    pub slope: f64,
}

/// Reference age for the averaged coefficients used when sex is unspecified
const YOUNG_ADULT_AGE: i32 = 25;

/// Durnin-Womersley coefficients by sex and age band
///
/// Published bands: <17, 17-19, 20-29, 30-39, 40-49, 50+. For
/// [`Sex::Unspecified`] the male and female young-adult (20-29) pairs are
/// averaged, which keeps the estimator defined for every patient without
/// inventing a table row.
pub fn density_coefficients(sex: Sex, age_years: i32) -> DensityCoefficients {
    match sex {
        Sex::Male => match age_years {
            i32::MIN..=16 => DensityCoefficients { intercept: 1.1533, slope: 0.0643 },
            17..=19 => DensityCoefficients { intercept: 1.1620, slope: 0.0630 },
            20..=29 => DensityCoefficients { intercept: 1.1631, slope: 0.0632 },
            30..=39 => DensityCoefficients { intercept: 1.1422, slope: 0.0544 },
            40..=49 => DensityCoefficients { intercept: 1.1620, slope: 0.0700 },
            _ => DensityCoefficients { intercept: 1.1715, slope: 0.0779 },
        },
        Sex::Female => match age_years {
            i32::MIN..=16 => DensityCoefficients { intercept: 1.1369, slope: 0.0598 },
            17..=19 => DensityCoefficients { intercept: 1.1549, slope: 0.0678 },
            20..=29 => DensityCoefficients { intercept: 1.1599, slope: 0.0717 },
            30..=39 => DensityCoefficients { intercept: 1.1423, slope: 0.0632 },
            40..=49 => DensityCoefficients { intercept: 1.1333, slope: 0.0612 },
            _ => DensityCoefficients { intercept: 1.1339, slope: 0.0645 },
        },
        Sex::Unspecified => {
            let male = density_coefficients(Sex::Male, YOUNG_ADULT_AGE);
            let female = density_coefficients(Sex::Female, YOUNG_ADULT_AGE);
            DensityCoefficients {
                intercept: (male.intercept + female.intercept) / 2.0,
                slope: (male.slope + female.slope) / 2.0,
            }
        }
    }
}

// ============================================================================
// Density and Body Fat
// ============================================================================

/// Siri conversion constants: BF% = (4.95 / density − 4.50) × 100
const SIRI_NUMERATOR: f64 = 4.95;
const SIRI_OFFSET: f64 = 4.50;

/// Plausibility bounds for a skinfold-derived body-fat percent
pub const BODY_FAT_MIN_PERCENT: f64 = 3.0;
pub const BODY_FAT_MAX_PERCENT: f64 = 50.0;

/// Body density from the four-skinfold sum
///
/// Formula: density = intercept − slope × log10(sum4)
///
/// `None` when the sum is not positive (log domain).
pub fn body_density(sum4_mm: f64, sex: Sex, age_years: i32) -> Option<f64> {
    if sum4_mm <= 0.0 {
        return None;
    }
    let coefficients = density_coefficients(sex, age_years);
    Some(coefficients.intercept - coefficients.slope * sum4_mm.log10())
}

/// Body-fat percent from density (Siri)
///
/// Formula: BF% = (4.95 / density − 4.50) × 100
pub fn siri_body_fat_percent(density: f64) -> f64 {
    (SIRI_NUMERATOR / density - SIRI_OFFSET) * 100.0
}

/// Whether a body-fat estimate is inside the plausible range [3, 50]
pub fn is_plausible_body_fat(percent: f64) -> bool {
    (BODY_FAT_MIN_PERCENT..=BODY_FAT_MAX_PERCENT).contains(&percent)
}

/// A body-composition estimate that passed the plausibility gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFatEstimate {
    /// Body density in g/cm³
    pub density: f64,
    /// Body fat as a percentage of total mass
    pub body_fat_percent: f64,
}

/// Estimate density and body fat from the four-skinfold sum
///
/// `None` when the sum is unusable or the resulting fat percent falls
/// outside [3, 50]. A discarded estimate drops both values: density without
/// a believable fat percent is the same methodology failure.
pub fn estimate_body_fat(sum4_mm: f64, sex: Sex, age_years: i32) -> Option<BodyFatEstimate> {
    let density = body_density(sum4_mm, sex, age_years)?;
    if density <= 0.0 {
        return None; // Siri divides by density
    }
    let body_fat_percent = siri_body_fat_percent(density);
    if !is_plausible_body_fat(body_fat_percent) {
        debug!(
            body_fat_percent,
            "skinfold body-fat estimate outside plausible range, discarded"
        );
        return None;
    }
    Some(BodyFatEstimate {
        density,
        body_fat_percent,
    })
}

// ============================================================================
// Derived Masses and Ratios
// ============================================================================

/// Lean (fat-free) mass from total weight and body-fat percent
///
/// Formula: LBM = weight × (1 − BF%/100)
pub fn lean_mass_kg(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Waist-to-hip circumference ratio
///
/// `None` when the hip circumference is zero or the ratio leaves the
/// representable decimal range.
pub fn waist_hip_ratio(waist_cm: Decimal, hip_cm: Decimal) -> Option<Decimal> {
    if hip_cm <= Decimal::ZERO {
        return None; // Avoid division by zero
    }
    waist_cm.checked_div(hip_cm)
}
