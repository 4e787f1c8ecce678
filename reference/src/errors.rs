//! Reference table loading errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Reference table is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Reference table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reference table has no entries")]
    Empty,
}
