//! Error types for the Nutrimetrics engine

use thiserror::Error;

/// Engine-level error types
///
/// The calculation pipeline itself never fails: missing or implausible data
/// produces absent result fields. Errors exist only at the explicit contract
/// boundaries, where a caller handed the engine something it promised not to.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Field '{field}' is not a numeric measurement value: {raw:?}")]
    MalformedField { field: &'static str, raw: String },

    #[error("Invalid nutrition preferences: {0}")]
    InvalidPreferences(String),
}
