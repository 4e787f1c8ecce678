//! Body mass index
//!
//! BMI and its classification bands. The quotient is computed in `Decimal`
//! so band edges compare exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// BMI classification bands (WHO adult cutoffs)
///
/// Band edges are inclusive below, exclusive above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClassification {
    Underweight,
    NormalWeight,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

impl BmiClassification {
    /// Get the BMI range for this band
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiClassification::Underweight => (0.0, 18.5),
            BmiClassification::NormalWeight => (18.5, 25.0),
            BmiClassification::Overweight => (25.0, 30.0),
            BmiClassification::ObesityClass1 => (30.0, 35.0),
            BmiClassification::ObesityClass2 => (35.0, 40.0),
            BmiClassification::ObesityClass3 => (40.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => "underweight",
            BmiClassification::NormalWeight => "normal weight",
            BmiClassification::Overweight => "overweight",
            BmiClassification::ObesityClass1 => "obesity class I",
            BmiClassification::ObesityClass2 => "obesity class II",
            BmiClassification::ObesityClass3 => "obesity class III",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// `None` when height is not positive (the normalizer already rejects
/// negatives) or the quotient leaves the representable decimal range.
pub fn calculate_bmi(weight_kg: Decimal, height_cm: Decimal) -> Option<Decimal> {
    if height_cm <= Decimal::ZERO {
        return None; // Avoid division by zero
    }
    let height_m = height_cm / Decimal::from(100);
    // checked_div also nulls the microscopic-height case where the square
    // rounds to zero at the maximum decimal scale
    let height_m_sq = height_m.checked_mul(height_m)?;
    weight_kg.checked_div(height_m_sq)
}

/// Classify a BMI value into its band
pub fn classify_bmi(bmi: Decimal) -> BmiClassification {
    if bmi < Decimal::new(185, 1) {
        BmiClassification::Underweight
    } else if bmi < Decimal::new(25, 0) {
        BmiClassification::NormalWeight
    } else if bmi < Decimal::new(30, 0) {
        BmiClassification::Overweight
    } else if bmi < Decimal::new(35, 0) {
        BmiClassification::ObesityClass1
    } else if bmi < Decimal::new(40, 0) {
        BmiClassification::ObesityClass2
    } else {
        BmiClassification::ObesityClass3
    }
}

/// Weight range that lands in the normal band for a given height
pub fn healthy_weight_range_kg(height_cm: Decimal) -> Option<(Decimal, Decimal)> {
    if height_cm <= Decimal::ZERO {
        return None;
    }
    let height_m = height_cm / Decimal::from(100);
    let height_m_sq = height_m.checked_mul(height_m)?;
    let min = Decimal::new(185, 1).checked_mul(height_m_sq)?;
    let max = Decimal::new(25, 0).checked_mul(height_m_sq)?;
    Some((min, max))
}
