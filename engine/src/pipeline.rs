//! Calculation pipeline
//!
//! Runs every derivation the inputs can support and assembles the sparse
//! result record. Each stage consumes only `Option` values from earlier
//! stages, so one missing measurement silently disables exactly the outputs
//! that depend on it and nothing else.
//!
//! # Calculation Stages
//!
//! 1. BMI and classification (weight, height)
//! 2. Skinfold sums (complete four-site or six-site profiles)
//! 3. Body density, fat percent, lean mass (four-site sum, sex, age, weight)
//! 4. Waist-to-hip ratio (waist, hip)
//! 5. BMR, preferring Katch-McArdle over Mifflin-St Jeor (lean mass, or
//!    weight, height, age, sex)
//! 6. Maintenance and target calories (BMR, activity, goal)
//! 7. Macro split and meal plan (target, weight, lean mass, preferences)

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::activity::infer_activity_multiplier;
use crate::bmi::{calculate_bmi, classify_bmi};
use crate::body_composition::{estimate_body_fat, lean_mass_kg, waist_hip_ratio};
use crate::energy::{bmr_katch_mcardle, bmr_mifflin_st_jeor, maintenance_kcal, target_kcal};
use crate::meal_plan::{allocate_macros, distribute_meals};
use crate::measurement::MeasurementInput;
use crate::normalize::{decimal_from_f64, round2};
use crate::patient::PatientContext;
use crate::result::CalculationResult;
use crate::skinfolds::{sum_of_four, sum_of_six};

/// Run every calculation the measurement and context can support
pub fn calculate_all(
    measurement: &MeasurementInput,
    context: &PatientContext,
) -> CalculationResult {
    let preferences = context.preferences.unwrap_or_default();

    let weight_f64 = measurement.weight_kg.and_then(|value| value.to_f64());
    let height_f64 = measurement.height_cm.and_then(|value| value.to_f64());

    // Stage 1: BMI, classified on the rounded value the patient will see
    let bmi = measurement
        .weight_kg
        .zip(measurement.height_cm)
        .and_then(|(weight, height)| calculate_bmi(weight, height))
        .map(round2);
    let bmi_classification = bmi.map(classify_bmi);

    // Stage 2: skinfold sums; density uses the unrounded four-site sum
    let sum4 = sum_of_four(measurement);
    let sum6 = sum_of_six(measurement);

    // Stage 3: composition
    let estimate = sum4
        .and_then(|sum| sum.to_f64())
        .and_then(|sum| estimate_body_fat(sum, context.sex, context.age_years));
    let lean_f64 = match (weight_f64, estimate) {
        (Some(weight), Some(estimate)) => Some(lean_mass_kg(weight, estimate.body_fat_percent)),
        _ => None,
    };

    // Stage 4: circumference ratio
    let ratio = measurement
        .waist_cm
        .zip(measurement.hip_cm)
        .and_then(|(waist, hip)| waist_hip_ratio(waist, hip))
        .map(round2);

    // Stages 5-6: energy
    let bmr = calculate_bmr(weight_f64, height_f64, lean_f64, context);
    let activity_multiplier = infer_activity_multiplier(&context.activity);
    let maintenance = bmr.map(|bmr| maintenance_kcal(bmr, activity_multiplier));
    let target = maintenance.map(|maintenance| target_kcal(maintenance, context.goal));

    // Stage 7: macros and meals
    let mut macros = None;
    let mut meal_plan = None;
    if let (Some(target), Some(weight)) = (target, weight_f64) {
        let split = allocate_macros(target, weight, lean_f64, context.goal, &preferences);
        macros = split.to_targets();
        meal_plan = distribute_meals(target, &split);
    }

    CalculationResult {
        bmi,
        bmi_classification,
        skinfold_sum4_mm: sum4.map(round2),
        skinfold_sum6_mm: sum6.map(round2),
        body_density: estimate.and_then(|estimate| decimal_from_f64(estimate.density, 4)),
        body_fat_percent: estimate
            .and_then(|estimate| decimal_from_f64(estimate.body_fat_percent, 2)),
        lean_mass_kg: lean_f64.and_then(|lean| decimal_from_f64(lean, 2)),
        waist_hip_ratio: ratio,
        bmr_kcal: bmr.and_then(|bmr| decimal_from_f64(bmr, 2)),
        maintenance_kcal: maintenance
            .and_then(|maintenance| decimal_from_f64(maintenance, 2)),
        target_kcal: target.and_then(|target| decimal_from_f64(target, 2)),
        macros,
        meal_plan,
    }
}

/// Katch-McArdle when lean mass is known, Mifflin-St Jeor otherwise
fn calculate_bmr(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    lean_mass_kg: Option<f64>,
    context: &PatientContext,
) -> Option<f64> {
    if let Some(lean) = lean_mass_kg {
        return Some(bmr_katch_mcardle(lean));
    }
    match (weight_kg, height_cm) {
        (Some(weight), Some(height)) if height > 0.0 && context.age_years >= 0 => {
            debug!("lean mass unavailable, bmr falls back to mifflin-st jeor");
            Some(bmr_mifflin_st_jeor(
                weight,
                height,
                context.age_years,
                context.sex,
            ))
        }
        _ => None,
    }
}
