//! Nutrimetrics calculation engine
//!
//! Pure calculation core for anthropometric assessment and energy planning.
//! One measurement session plus patient context goes in; body composition,
//! energy needs and a daily meal plan come out.
//!
//! # Design Principles
//!
//! 1. **Sparse over zeroed**: anything that cannot be computed is absent from
//!    the result, never a placeholder value.
//! 2. **Fail closed**: malformed form input becomes a missing value (or a
//!    named error in strict mode), not a guess.
//! 3. **Full precision inside**: values are carried unrounded between stages
//!    and rounded exactly once, at the result boundary.
//! 4. **Pure throughout**: every stage is a deterministic function of its
//!    inputs, so the whole pipeline is trivially testable.

pub mod activity;
pub mod bmi;
pub mod body_composition;
pub mod energy;
pub mod errors;
pub mod meal_plan;
pub mod measurement;
pub mod normalize;
pub mod patient;
pub mod pipeline;
pub mod preferences;
pub mod result;
pub mod skinfolds;

pub use activity::{ActivityLevel, ActivityProfile, TrainingProfile};
pub use bmi::BmiClassification;
pub use errors::EngineError;
pub use meal_plan::{MacroTargets, MealAllocation, MealPlan, MealSlot};
pub use measurement::{MeasurementInput, RawMeasurement};
pub use normalize::RawValue;
pub use patient::{age_on, Goal, PatientContext, Sex};
pub use pipeline::calculate_all;
pub use preferences::NutritionPreferences;
pub use result::CalculationResult;
