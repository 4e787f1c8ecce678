//! Technical error of measurement (TEM) tables
//!
//! A TEM table records, per measurement field, how far two replicate
//! measurements by the same measurer may disagree before the pair is
//! considered unreliable. Like the population tables, the numbers are
//! practice-supplied.

use serde::{Deserialize, Serialize};

use crate::errors::ReferenceError;

/// Acceptable absolute difference between replicates of one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemEntry {
    pub field: String,
    pub tem: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemTable {
    pub version: String,
    pub entries: Vec<TemEntry>,
}

impl TemTable {
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

    pub fn get(&self, field: &str) -> Option<&TemEntry> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    /// Whether two replicates agree within the field's tolerance
    ///
    /// `None` when the field has no TEM entry to judge by.
    pub fn within_tolerance(&self, field: &str, first: f64, second: f64) -> Option<bool> {
        let entry = self.get(field)?;
        Some((first - second).abs() <= entry.tem)
    }

    /// Collapse replicate measurements into the value to record
    ///
    /// Standard practice: a single measurement stands as taken; a pair is
    /// averaged when it agrees within tolerance and rejected (remeasure)
    /// otherwise; three or more replicates take the median, which needs no
    /// tolerance judgement. An even replicate count averages the two middle
    /// values.
    pub fn adjusted_value(&self, field: &str, replicates: &[f64]) -> Option<f64> {
        match replicates {
            [] => None,
            [single] => Some(*single),
            [first, second] => {
                if self.within_tolerance(field, *first, *second)? {
                    Some((first + second) / 2.0)
                } else {
                    None
                }
            }
            _ => {
                let mut sorted = replicates.to_vec();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    Some((sorted[mid - 1] + sorted[mid]) / 2.0)
                } else {
                    Some(sorted[mid])
                }
            }
        }
    }
}
