//! Population reference tables
//!
//! A reference table maps measurement fields to population mean and standard
//! deviation, optionally by sex. The practice supplies the numbers (loaded
//! from TOML or JSON at startup); this module only answers where a measured
//! value sits against them.

use serde::{Deserialize, Serialize};

use crate::errors::ReferenceError;

/// One reference row: population mean and SD for a measurement field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Measurement field name, matching the engine's field naming
    pub field: String,
    /// Sex the row applies to; absent means the row is unisex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    pub mean: f64,
    pub sd: f64,
}

/// A versioned set of reference entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Practice-chosen version label, carried through for audit trails
    pub version: String,
    pub entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn from_toml_str(text: &str) -> Result<Self, ReferenceError> {
        let table: Self = toml::from_str(text)?;
        table.check_non_empty()
    }

    pub fn from_json_str(text: &str) -> Result<Self, ReferenceError> {
        let table: Self = serde_json::from_str(text)?;
        table.check_non_empty()
    }

    fn check_non_empty(self) -> Result<Self, ReferenceError> {
        if self.entries.is_empty() {
            return Err(ReferenceError::Empty);
        }
        Ok(self)
    }

    /// Look up the row for a field, preferring a sex-specific match
    ///
    /// A unisex row answers for any sex; a sex-specific row only for its own.
    pub fn get(&self, field: &str, sex: Option<&str>) -> Option<&ReferenceEntry> {
        let sex_specific = sex.and_then(|sex| {
            self.entries.iter().find(|entry| {
                entry.field == field
                    && entry
                        .sex
                        .as_deref()
                        .is_some_and(|row_sex| row_sex.eq_ignore_ascii_case(sex))
            })
        });
        sex_specific.or_else(|| {
            self.entries
                .iter()
                .find(|entry| entry.field == field && entry.sex.is_none())
        })
    }

    /// Standard score of a measured value against the reference population
    ///
    /// `None` when no row matches or the row's SD is unusable.
    pub fn z_score(&self, field: &str, sex: Option<&str>, value: f64) -> Option<f64> {
        let entry = self.get(field, sex)?;
        if entry.sd <= 0.0 || !entry.sd.is_finite() {
            return None;
        }
        Some((value - entry.mean) / entry.sd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TABLE_TOML: &str = r#"
version = "2024.1"

[[entries]]
field = "triceps_mm"
sex = "male"
mean = 10.0
sd = 4.0

[[entries]]
field = "triceps_mm"
sex = "female"
mean = 16.0
sd = 5.5

[[entries]]
field = "waist_cm"
mean = 84.0
sd = 12.0
"#;

    fn table() -> ReferenceTable {
        ReferenceTable::from_toml_str(TABLE_TOML).unwrap()
    }

    #[test]
    fn test_load_from_toml() {
        let table = table();
        assert_eq!(table.version, "2024.1");
        assert_eq!(table.entries.len(), 3);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "version": "2024.1",
            "entries": [
                { "field": "waist_cm", "mean": 84.0, "sd": 12.0 }
            ]
        }"#;
        let table = ReferenceTable::from_json_str(json).unwrap();
        assert_eq!(table.entries.len(), 1);
        assert_eq!(table.entries[0].sex, None);
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = ReferenceTable::from_toml_str("version = \"x\"\nentries = []\n");
        assert!(matches!(result, Err(ReferenceError::Empty)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = ReferenceTable::from_toml_str("version = ");
        assert!(matches!(result, Err(ReferenceError::Toml(_))));
    }

    #[rstest]
    #[case(Some("male"), 18.0, 2.0)]
    #[case(Some("MALE"), 18.0, 2.0)] // case-insensitive sex match
    #[case(Some("female"), 16.0, 0.0)]
    fn test_z_score_sex_specific(
        #[case] sex: Option<&str>,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(table().z_score("triceps_mm", sex, value), Some(expected));
    }

    #[test]
    fn test_unisex_row_answers_for_any_sex() {
        let table = table();
        assert_eq!(table.z_score("waist_cm", Some("male"), 96.0), Some(1.0));
        assert_eq!(table.z_score("waist_cm", None, 72.0), Some(-1.0));
    }

    #[test]
    fn test_sex_specific_row_needs_the_sex() {
        // Only sex-specific triceps rows exist, so a sexless query has no answer
        assert_eq!(table().z_score("triceps_mm", None, 12.0), None);
    }

    #[test]
    fn test_unknown_field_has_no_score() {
        assert_eq!(table().z_score("calf_cm", Some("male"), 30.0), None);
    }

    #[test]
    fn test_degenerate_sd_has_no_score() {
        let toml = r#"
version = "x"

[[entries]]
field = "waist_cm"
mean = 84.0
sd = 0.0
"#;
        let table = ReferenceTable::from_toml_str(toml).unwrap();
        assert_eq!(table.z_score("waist_cm", None, 90.0), None);
    }
}
