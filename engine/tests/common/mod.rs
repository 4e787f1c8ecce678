//! Shared fixtures for the integration tests

use nutrimetrics_engine::{ActivityProfile, Goal, PatientContext, Sex, TrainingProfile};
use serde_json::json;

/// A realistic clinic form: values arrive as strings and numbers mixed
pub fn clinic_form_json() -> serde_json::Value {
    json!({
        "weight_kg": "72",
        "height_cm": 175,
        "waist_cm": "80.0",
        "hip_cm": "100",
        "triceps_mm": "12",
        "biceps_mm": 8,
        "subscapular_mm": "14",
        "suprailiac_mm": "13.0"
    })
}

/// A 25-year-old male cutting weight who climbs three days a week
pub fn adult_male_context() -> PatientContext {
    PatientContext {
        age_years: 25,
        sex: Sex::Male,
        goal: Goal::Lose,
        activity: ActivityProfile::Training(TrainingProfile {
            trains: true,
            training_days: Some("3 days per week".to_string()),
            schedule: None,
            sport: Some("climbing".to_string()),
        }),
        preferences: None,
    }
}
