//! Energy expenditure and calorie targets
//!
//! Two BMR estimators and the arithmetic that turns a BMR into a daily
//! calorie target. Katch-McArdle is preferred whenever a lean-mass estimate
//! exists because it responds to measured composition; Mifflin-St Jeor is
//! the anthropometric fallback when skinfolds were not taken or were
//! discarded.

use crate::patient::{Goal, Sex};

// ============================================================================
// Constants
// ============================================================================

/// Katch-McArdle: BMR = 370 + 21.6 × lean mass (kg)
const KATCH_MCARDLE_BASE: f64 = 370.0;
const KATCH_MCARDLE_PER_KG_LEAN: f64 = 21.6;

/// Mifflin-St Jeor sex constants
const MIFFLIN_SEX_CONST_MALE: f64 = 5.0;
const MIFFLIN_SEX_CONST_FEMALE: f64 = -161.0;
/// Arithmetic midpoint of the male and female constants, a convention for
/// unspecified sex rather than a clinically derived value
const MIFFLIN_SEX_CONST_UNSPECIFIED: f64 = -78.0;

/// Hard floor for any daily calorie target
pub const MIN_TARGET_KCAL: f64 = 900.0;

// ============================================================================
// Basal Metabolic Rate
// ============================================================================

/// Katch-McArdle BMR from lean body mass
pub fn bmr_katch_mcardle(lean_mass_kg: f64) -> f64 {
    KATCH_MCARDLE_BASE + KATCH_MCARDLE_PER_KG_LEAN * lean_mass_kg
}

fn mifflin_sex_constant(sex: Sex) -> f64 {
    match sex {
        Sex::Male => MIFFLIN_SEX_CONST_MALE,
        Sex::Female => MIFFLIN_SEX_CONST_FEMALE,
        Sex::Unspecified => MIFFLIN_SEX_CONST_UNSPECIFIED,
    }
}

/// Mifflin-St Jeor BMR from weight, height, age and sex
///
/// Formula: 10 × weight + 6.25 × height − 5 × age + sex constant
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + mifflin_sex_constant(sex)
}

// ============================================================================
// Daily Targets
// ============================================================================

/// Maintenance calories: BMR scaled by the activity multiplier
pub fn maintenance_kcal(bmr_kcal: f64, activity_multiplier: f64) -> f64 {
    bmr_kcal * activity_multiplier
}

/// Goal-adjusted daily calorie target
///
/// Maintenance scaled by the goal factor, rounded to a whole kilocalorie,
/// and never below [`MIN_TARGET_KCAL`].
pub fn target_kcal(maintenance_kcal: f64, goal: Goal) -> f64 {
    (maintenance_kcal * goal.calorie_factor()).round().max(MIN_TARGET_KCAL)
}
