//! Practice-level nutrition preferences
//!
//! Preferences are owned by the practice configuration, not by patient data:
//! the pipeline reads them once per calculation and never mutates them.
//! Loading is hierarchical:
//! 1. Default values (in code)
//! 2. TOML config file (config/nutrition.toml)
//! 3. Environment variables (prefix: NUTRI__)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::patient::Goal;

/// Protein and fat multipliers used by the macro allocator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionPreferences {
    /// Protein grams per kg of effective mass when losing weight
    pub protein_per_kg_lose: f64,
    /// Protein grams per kg of effective mass at maintenance
    pub protein_per_kg_maintain: f64,
    /// Protein grams per kg of effective mass when gaining weight
    pub protein_per_kg_gain: f64,
    /// Fat grams per kg of total body weight
    pub fat_per_kg: f64,
}

impl Default for NutritionPreferences {
    fn default() -> Self {
        Self {
            protein_per_kg_lose: 1.8,
            protein_per_kg_maintain: 1.8,
            protein_per_kg_gain: 2.0,
            fat_per_kg: 0.9,
        }
    }
}

impl NutritionPreferences {
    /// Protein multiplier for a goal
    pub fn protein_per_kg(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => self.protein_per_kg_lose,
            Goal::Maintain => self.protein_per_kg_maintain,
            Goal::Gain => self.protein_per_kg_gain,
        }
    }

    /// Check the multipliers are usable before they reach the allocator
    ///
    /// Runs at the settings boundary; the pipeline itself trusts whatever it
    /// is given.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, value) in [
            ("protein_per_kg_lose", self.protein_per_kg_lose),
            ("protein_per_kg_maintain", self.protein_per_kg_maintain),
            ("protein_per_kg_gain", self.protein_per_kg_gain),
            ("fat_per_kg", self.fat_per_kg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidPreferences(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
            if value > 10.0 {
                return Err(EngineError::InvalidPreferences(format!(
                    "{} is implausibly high: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Load preferences from file and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. config/nutrition.toml (optional)
    /// 3. Environment variables with NUTRI__ prefix
    ///    e.g., NUTRI__FAT_PER_KG=1.0
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&NutritionPreferences::default())?)
            .add_source(config::File::with_name("config/nutrition.toml").required(false))
            .add_source(config::Environment::with_prefix("NUTRI").separator("__"))
            .build()?;

        let preferences: NutritionPreferences = config.try_deserialize()?;
        preferences.validate()?;
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let preferences = NutritionPreferences::default();
        assert_eq!(preferences.protein_per_kg_lose, 1.8);
        assert_eq!(preferences.protein_per_kg_maintain, 1.8);
        assert_eq!(preferences.protein_per_kg_gain, 2.0);
        assert_eq!(preferences.fat_per_kg, 0.9);
    }

    #[test]
    fn test_protein_multiplier_by_goal() {
        let preferences = NutritionPreferences::default();
        assert_eq!(preferences.protein_per_kg(Goal::Lose), 1.8);
        assert_eq!(preferences.protein_per_kg(Goal::Maintain), 1.8);
        assert_eq!(preferences.protein_per_kg(Goal::Gain), 2.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(NutritionPreferences::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_multipliers() {
        let zero = NutritionPreferences {
            protein_per_kg_lose: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let negative = NutritionPreferences {
            fat_per_kg: -0.9,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = NutritionPreferences {
            protein_per_kg_gain: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let absurd = NutritionPreferences {
            protein_per_kg_maintain: 50.0,
            ..Default::default()
        };
        assert!(absurd.validate().is_err());
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let partial: NutritionPreferences = toml_from_str("fat_per_kg = 1.0");
        assert_eq!(partial.fat_per_kg, 1.0);
        assert_eq!(partial.protein_per_kg_gain, 2.0);
    }

    fn toml_from_str(text: &str) -> NutritionPreferences {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&NutritionPreferences::default()).unwrap())
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .unwrap();
        config.try_deserialize().unwrap()
    }
}
