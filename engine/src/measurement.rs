//! Measurement records
//!
//! [`RawMeasurement`] is the wire shape of an anthropometry form: every field
//! optional, submitted as text or number. [`MeasurementInput`] is the
//! normalized record the calculation pipeline consumes. Weight is in kg,
//! heights and circumferences in cm, skinfolds in mm.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::normalize::{normalize, normalize_strict, serialize_rounded2, RawValue};

/// Raw anthropometry form submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMeasurement {
    pub weight_kg: Option<RawValue>,
    pub height_cm: Option<RawValue>,
    pub seated_height_cm: Option<RawValue>,
    pub relaxed_arm_cm: Option<RawValue>,
    pub flexed_arm_cm: Option<RawValue>,
    pub waist_cm: Option<RawValue>,
    pub hip_cm: Option<RawValue>,
    pub thigh_cm: Option<RawValue>,
    pub calf_cm: Option<RawValue>,
    pub triceps_mm: Option<RawValue>,
    pub biceps_mm: Option<RawValue>,
    pub subscapular_mm: Option<RawValue>,
    pub suprailiac_mm: Option<RawValue>,
    pub supraspinale_mm: Option<RawValue>,
    pub abdominal_mm: Option<RawValue>,
    pub front_thigh_mm: Option<RawValue>,
    pub medial_calf_mm: Option<RawValue>,
}

/// Normalized measurement record
///
/// Every present value is a finite, non-negative decimal at full parsed
/// precision; serialization rounds to two places. Circumferences beyond
/// waist and hip are carried for the reporting layer, the pipeline does not
/// consume them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementInput {
    #[serde(serialize_with = "serialize_rounded2")]
    pub weight_kg: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub height_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub seated_height_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub relaxed_arm_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub flexed_arm_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub waist_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub hip_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub thigh_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub calf_cm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub triceps_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub biceps_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub subscapular_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub suprailiac_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub supraspinale_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub abdominal_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub front_thigh_mm: Option<Decimal>,
    #[serde(serialize_with = "serialize_rounded2")]
    pub medial_calf_mm: Option<Decimal>,
}

impl MeasurementInput {
    /// Normalize a raw submission, dropping anything unusable
    pub fn from_raw(raw: &RawMeasurement) -> Self {
        Self {
            weight_kg: normalize(raw.weight_kg.as_ref()),
            height_cm: normalize(raw.height_cm.as_ref()),
            seated_height_cm: normalize(raw.seated_height_cm.as_ref()),
            relaxed_arm_cm: normalize(raw.relaxed_arm_cm.as_ref()),
            flexed_arm_cm: normalize(raw.flexed_arm_cm.as_ref()),
            waist_cm: normalize(raw.waist_cm.as_ref()),
            hip_cm: normalize(raw.hip_cm.as_ref()),
            thigh_cm: normalize(raw.thigh_cm.as_ref()),
            calf_cm: normalize(raw.calf_cm.as_ref()),
            triceps_mm: normalize(raw.triceps_mm.as_ref()),
            biceps_mm: normalize(raw.biceps_mm.as_ref()),
            subscapular_mm: normalize(raw.subscapular_mm.as_ref()),
            suprailiac_mm: normalize(raw.suprailiac_mm.as_ref()),
            supraspinale_mm: normalize(raw.supraspinale_mm.as_ref()),
            abdominal_mm: normalize(raw.abdominal_mm.as_ref()),
            front_thigh_mm: normalize(raw.front_thigh_mm.as_ref()),
            medial_calf_mm: normalize(raw.medial_calf_mm.as_ref()),
        }
    }

    /// Strict normalization: present-but-malformed text is a caller error
    ///
    /// Absent, empty, negative, and non-finite values still normalize to
    /// `None` exactly as in [`MeasurementInput::from_raw`].
    pub fn try_from_raw(raw: &RawMeasurement) -> Result<Self, EngineError> {
        Ok(Self {
            weight_kg: normalize_strict("weight_kg", raw.weight_kg.as_ref())?,
            height_cm: normalize_strict("height_cm", raw.height_cm.as_ref())?,
            seated_height_cm: normalize_strict("seated_height_cm", raw.seated_height_cm.as_ref())?,
            relaxed_arm_cm: normalize_strict("relaxed_arm_cm", raw.relaxed_arm_cm.as_ref())?,
            flexed_arm_cm: normalize_strict("flexed_arm_cm", raw.flexed_arm_cm.as_ref())?,
            waist_cm: normalize_strict("waist_cm", raw.waist_cm.as_ref())?,
            hip_cm: normalize_strict("hip_cm", raw.hip_cm.as_ref())?,
            thigh_cm: normalize_strict("thigh_cm", raw.thigh_cm.as_ref())?,
            calf_cm: normalize_strict("calf_cm", raw.calf_cm.as_ref())?,
            triceps_mm: normalize_strict("triceps_mm", raw.triceps_mm.as_ref())?,
            biceps_mm: normalize_strict("biceps_mm", raw.biceps_mm.as_ref())?,
            subscapular_mm: normalize_strict("subscapular_mm", raw.subscapular_mm.as_ref())?,
            suprailiac_mm: normalize_strict("suprailiac_mm", raw.suprailiac_mm.as_ref())?,
            supraspinale_mm: normalize_strict("supraspinale_mm", raw.supraspinale_mm.as_ref())?,
            abdominal_mm: normalize_strict("abdominal_mm", raw.abdominal_mm.as_ref())?,
            front_thigh_mm: normalize_strict("front_thigh_mm", raw.front_thigh_mm.as_ref())?,
            medial_calf_mm: normalize_strict("medial_calf_mm", raw.medial_calf_mm.as_ref())?,
        })
    }
}
