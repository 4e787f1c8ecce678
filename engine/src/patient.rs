//! Patient context for a calculation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::activity::ActivityProfile;
use crate::preferences::NutritionPreferences;

/// Sex used by the physiological formulas
///
/// `Unspecified` keeps every formula total; the affected coefficients fall
/// back to documented midpoint conventions instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Sex {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Unspecified => "Unspecified",
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            "" | "unspecified" | "other" => Ok(Sex::Unspecified),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

/// Nutrition goal driving the calorie and protein targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Multiplier applied to maintenance calories for this goal
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::Lose => 0.85,
            Goal::Maintain => 1.0,
            Goal::Gain => 1.10,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Lose => "Weight loss",
            Goal::Maintain => "Weight maintenance",
            Goal::Gain => "Weight gain",
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "loss" | "cut" => Ok(Goal::Lose),
            "maintain" | "maintenance" => Ok(Goal::Maintain),
            "gain" | "bulk" => Ok(Goal::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Everything about the patient a calculation needs besides the measurement
///
/// Built fresh for every call. Age in whole years is derived from the birth
/// date at call time (see [`age_on`]), never stored alongside results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    /// Age in whole years at the time of calculation
    pub age_years: i32,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub activity: ActivityProfile,
    /// Practice-level nutrition preferences; defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<NutritionPreferences>,
}

impl PatientContext {
    /// Context with defaults for everything except age and sex
    pub fn new(age_years: i32, sex: Sex) -> Self {
        Self {
            age_years,
            sex,
            goal: Goal::default(),
            activity: ActivityProfile::default(),
            preferences: None,
        }
    }
}

/// Whole-year age on a given date
///
/// Saturates at zero when the dates are inverted.
pub fn age_on(birth_date: NaiveDate, on: NaiveDate) -> i32 {
    on.years_since(birth_date).unwrap_or(0) as i32
}
