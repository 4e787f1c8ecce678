//! Raw measurement value normalization
//!
//! Measurement forms submit values as free text, numbers, or nothing at all.
//! This module collapses that union into `Option<Decimal>`: anything that is
//! not a finite, non-negative numeral becomes `None`, so the formula stages
//! only ever see usable numbers.
//!
//! Parsed values keep their full precision in memory. Rounding to the
//! serialization scale happens on output only, so chained calculations never
//! consume pre-rounded values.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

use crate::errors::EngineError;

/// Decimal places kept when measurement and result values are serialized
pub const MEASUREMENT_SCALE: u32 = 2;

/// A raw measurement value as submitted by a client
///
/// Untagged: JSON numbers and strings map onto the first two variants; any
/// other shape (booleans, arrays, objects) is captured whole and dropped
/// during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Normalize a raw value to a finite, non-negative decimal
///
/// Fails closed: absent values, non-finite numbers, negative values,
/// unparsable text, and non-scalar JSON all become `None`.
pub fn normalize(raw: Option<&RawValue>) -> Option<Decimal> {
    match raw? {
        RawValue::Number(n) => {
            if !n.is_finite() {
                return None;
            }
            Decimal::from_f64(*n).filter(non_negative)
        }
        RawValue::Text(t) => parse_decimal(t).filter(non_negative),
        RawValue::Other(_) => None,
    }
}

/// Strict variant of [`normalize`] for callers that treat malformed text as
/// a broken input contract rather than a missing value
///
/// Only present-but-non-numeric text is an error. Absent values, empty
/// strings, negative numerals, and non-finite numbers normalize to `None`
/// exactly as in the lenient path.
pub fn normalize_strict(
    field: &'static str,
    raw: Option<&RawValue>,
) -> Result<Option<Decimal>, EngineError> {
    match raw {
        Some(RawValue::Text(t)) => {
            let trimmed = t.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match parse_decimal(trimmed) {
                Some(parsed) => Ok(Some(parsed).filter(non_negative)),
                None => Err(EngineError::MalformedField {
                    field,
                    raw: t.clone(),
                }),
            }
        }
        other => Ok(normalize(other)),
    }
}

/// Parse decimal text, accepting plain and scientific notation
fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn non_negative(value: &Decimal) -> bool {
    *value >= Decimal::ZERO
}

/// Round to the standard measurement scale, padded to exactly two places
pub fn round2(value: Decimal) -> Decimal {
    round_to_scale(value, MEASUREMENT_SCALE)
}

/// Round to a fixed scale, padded with zeros so serialized values always
/// show the same number of places
pub fn round_to_scale(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Convert a finite float to a fixed-scale decimal
///
/// `None` when the float cannot be represented (non-finite or out of the
/// decimal range).
pub fn decimal_from_f64(value: f64, scale: u32) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| round_to_scale(d, scale))
}

/// Serialize an optional measurement rounded to two decimal places
///
/// The stored value keeps its full precision; rounding applies to the
/// serialized form only.
pub fn serialize_rounded2<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        // Qualified call: `Decimal` has an inherent `serialize` returning raw
        // bytes that would otherwise shadow the serde trait method.
        Some(d) => Serialize::serialize(&round2(*d), serializer),
        None => serializer.serialize_none(),
    }
}
