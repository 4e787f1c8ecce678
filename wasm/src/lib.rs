//! Nutrimetrics WASM Module
//!
//! WebAssembly bindings for the calculation engine, so the intake form can
//! preview results in the browser before anything is submitted. The preview
//! runs the same pipeline the practice runs server-side; values that cannot
//! be computed are simply absent from the preview JSON.

use wasm_bindgen::prelude::*;

use nutrimetrics_engine::{calculate_all, MeasurementInput, PatientContext, RawMeasurement};

/// Run the full pipeline on raw form JSON and return the result as JSON
///
/// Normalization is lenient: unusable form fields disable their outputs
/// instead of failing the preview.
#[wasm_bindgen]
pub fn preview_calculation(measurement_json: &str, context_json: &str) -> Result<String, JsValue> {
    preview(measurement_json, context_json).map_err(|error| JsValue::from_str(&error))
}

fn preview(measurement_json: &str, context_json: &str) -> Result<String, String> {
    let raw: RawMeasurement = serde_json::from_str(measurement_json)
        .map_err(|error| format!("Measurement is not valid JSON: {error}"))?;
    let context: PatientContext = serde_json::from_str(context_json)
        .map_err(|error| format!("Patient context is not valid JSON: {error}"))?;

    let measurement = MeasurementInput::from_raw(&raw);
    let result = calculate_all(&measurement, &context);
    serde_json::to_string(&result).map_err(|error| error.to_string())
}

/// Quick BMI preview for the two fields the form fills first
///
/// `undefined` when the height is unusable or the quotient is not finite.
#[wasm_bindgen]
pub fn preview_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 || !height_cm.is_finite() || !weight_kg.is_finite() || weight_kg < 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m)).filter(|bmi| bmi.is_finite())
}
