//! End-to-end tests: raw form JSON through the pipeline to serialized output

mod common;

use common::{adult_male_context, clinic_form_json};
use nutrimetrics_engine::{
    calculate_all, EngineError, Goal, MeasurementInput, NutritionPreferences, PatientContext,
    RawMeasurement, RawValue, Sex,
};
use serde_json::json;

#[test]
fn test_form_submission_end_to_end() {
    let raw: RawMeasurement = serde_json::from_value(clinic_form_json()).unwrap();
    let measurement = MeasurementInput::from_raw(&raw);
    let result = calculate_all(&measurement, &adult_male_context());
    let output = serde_json::to_value(&result).unwrap();

    assert_eq!(output["bmi"], "23.51");
    assert_eq!(output["bmi_classification"], "normal_weight");
    assert_eq!(output["skinfold_sum4_mm"], "47.00");
    assert_eq!(output["body_density"], "1.0574");
    assert_eq!(output["body_fat_percent"], "18.12");
    assert_eq!(output["waist_hip_ratio"], "0.80");
    assert_eq!(output["target_kcal"], "2165.00");

    // The six-site profile was never measured
    assert!(output.get("skinfold_sum6_mm").is_none());
}

#[test]
fn test_lenient_normalization_drops_junk_fields() {
    let form = json!({
        "weight_kg": "abc",
        "height_cm": "175",
        "hip_cm": "n/a",
        "waist_cm": "80"
    });
    let raw: RawMeasurement = serde_json::from_value(form).unwrap();
    let measurement = MeasurementInput::from_raw(&raw);

    assert_eq!(measurement.weight_kg, None);
    assert_eq!(measurement.hip_cm, None);
    assert!(measurement.height_cm.is_some());

    // No weight and no hip: nothing downstream of either appears
    let result = calculate_all(&measurement, &adult_male_context());
    assert_eq!(result.bmi, None);
    assert_eq!(result.waist_hip_ratio, None);
}

#[test]
fn test_strict_normalization_names_the_field() {
    let raw = RawMeasurement {
        weight_kg: Some(RawValue::from("seventy")),
        height_cm: Some(RawValue::from(175.0)),
        ..Default::default()
    };
    let error = MeasurementInput::try_from_raw(&raw).unwrap_err();
    assert!(matches!(
        error,
        EngineError::MalformedField {
            field: "weight_kg",
            ..
        }
    ));
    assert!(error.to_string().contains("weight_kg"));
    assert!(error.to_string().contains("seventy"));
}

#[test]
fn test_sedentary_lose_goal_reaches_floor_safe_target() {
    let form = json!({ "weight_kg": "80", "height_cm": "180" });
    let raw: RawMeasurement = serde_json::from_value(form).unwrap();
    let measurement = MeasurementInput::from_raw(&raw);

    let mut context = PatientContext::new(30, Sex::Male);
    context.goal = Goal::Lose;
    let result = calculate_all(&measurement, &context);

    // Mifflin-St Jeor 1780 kcal, sedentary baseline 1.2, then the lose factor
    assert_eq!(result.bmr_kcal.unwrap().to_string(), "1780.00");
    assert_eq!(result.maintenance_kcal.unwrap().to_string(), "2136.00");
    assert_eq!(result.target_kcal.unwrap().to_string(), "1816.00");
}

#[test]
fn test_sparse_output_never_contains_null() {
    let form = json!({ "weight_kg": 72, "height_cm": 175 });
    let raw: RawMeasurement = serde_json::from_value(form).unwrap();
    let measurement = MeasurementInput::from_raw(&raw);
    let result = calculate_all(&measurement, &PatientContext::new(25, Sex::Male));
    let output = serde_json::to_value(&result).unwrap();

    let object = output.as_object().unwrap();
    assert!(object.values().all(|value| !value.is_null()));
    assert!(object.contains_key("bmi"));
    assert!(!object.contains_key("body_fat_percent"));
    assert!(!object.contains_key("lean_mass_kg"));
}

#[test]
fn test_custom_preferences_raise_protein_dose() {
    let form = json!({ "weight_kg": "70", "height_cm": "175" });
    let raw: RawMeasurement = serde_json::from_value(form).unwrap();
    let measurement = MeasurementInput::from_raw(&raw);

    let mut context = PatientContext::new(30, Sex::Male);
    let default_result = calculate_all(&measurement, &context);
    assert_eq!(
        default_result.macros.as_ref().unwrap().protein_g.to_string(),
        "126.00"
    );

    context.preferences = Some(NutritionPreferences {
        protein_per_kg_maintain: 2.2,
        ..Default::default()
    });
    let custom_result = calculate_all(&measurement, &context);
    assert_eq!(
        custom_result.macros.as_ref().unwrap().protein_g.to_string(),
        "154.00"
    );
}

#[test]
fn test_meal_plan_serialization_shape() {
    let raw: RawMeasurement = serde_json::from_value(clinic_form_json()).unwrap();
    let measurement = MeasurementInput::from_raw(&raw);
    let result = calculate_all(&measurement, &adult_male_context());
    let output = serde_json::to_value(&result).unwrap();

    let meals = output["meal_plan"]["meals"].as_array().unwrap();
    assert_eq!(meals.len(), 5);
    assert_eq!(meals[0]["slot"], "breakfast");
    assert_eq!(meals[0]["calories_kcal"], "541.25");
    assert_eq!(meals[4]["slot"], "dinner");

    let macros = output["macros"].as_object().unwrap();
    assert!(macros.contains_key("protein_g"));
    assert!(macros.contains_key("carbs_g"));
    assert!(macros.contains_key("fat_g"));
}
