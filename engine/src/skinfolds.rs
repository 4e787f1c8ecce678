//! Skinfold aggregation
//!
//! Standard sums consumed by the downstream estimators. A sum only exists
//! when every member site was measured: a partial sum would silently change
//! what the downstream coefficients mean, so one missing site nulls the
//! whole aggregate.

use rust_decimal::Decimal;

use crate::measurement::MeasurementInput;

/// Sum of four skinfolds (Durnin-Womersley sites)
///
/// triceps + biceps + subscapular + suprailiac
///
/// `None` when any site is missing or the total exceeds the decimal range.
pub fn sum_of_four(measurement: &MeasurementInput) -> Option<Decimal> {
    match (
        measurement.triceps_mm,
        measurement.biceps_mm,
        measurement.subscapular_mm,
        measurement.suprailiac_mm,
    ) {
        (Some(triceps), Some(biceps), Some(subscapular), Some(suprailiac)) => {
            [biceps, subscapular, suprailiac]
                .into_iter()
                .try_fold(triceps, Decimal::checked_add)
        }
        _ => None,
    }
}

/// Sum of six skinfolds (ISAK sites)
///
/// triceps + subscapular + supraspinale + abdominal + front thigh + medial calf
///
/// `None` when any site is missing or the total exceeds the decimal range.
pub fn sum_of_six(measurement: &MeasurementInput) -> Option<Decimal> {
    match (
        measurement.triceps_mm,
        measurement.subscapular_mm,
        measurement.supraspinale_mm,
        measurement.abdominal_mm,
        measurement.front_thigh_mm,
        measurement.medial_calf_mm,
    ) {
        (Some(a), Some(b), Some(c), Some(d), Some(e), Some(f)) => [b, c, d, e, f]
            .into_iter()
            .try_fold(a, Decimal::checked_add),
        _ => None,
    }
}
