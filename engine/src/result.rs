//! Calculation output record
//!
//! Every field is optional and absent fields are omitted from JSON: a value
//! that could not be computed must be indistinguishable from one that was
//! never requested, so downstream consumers cannot confuse "0" with
//! "unknown".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bmi::BmiClassification;
use crate::meal_plan::{MacroTargets, MealPlan};

/// Everything the engine can derive for one measurement session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationResult {
    /// Body mass index, kg/m², 2 decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_classification: Option<BmiClassification>,

    /// Sum of triceps, biceps, subscapular and suprailiac folds, mm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skinfold_sum4_mm: Option<Decimal>,

    /// Sum of the six-site profile, mm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skinfold_sum6_mm: Option<Decimal>,

    /// Body density, g/cm³, 4 decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_density: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lean_mass_kg: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_hip_ratio: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr_kcal: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_kcal: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_kcal: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroTargets>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_plan: Option<MealPlan>,
}

impl CalculationResult {
    /// True when nothing could be derived
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
