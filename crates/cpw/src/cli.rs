//! Core logic for the `cpw-encode` binary.
//!
//! Reading the weightings file and printing the result live in the binary;
//! this module owns the JSON boundary: a JSON object mapping category names
//! to arrays of non-negative integers, whose key order carries through to
//! the output (`serde_json` is built with `preserve_order`).

use serde_json::Value;

use crate::{CpwEncoder, CpwError, TraitWeightings};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    NotAnObject,
    NotAnArray(String),
    NotAWeight(String),
    UnknownMode(String),
    Encode(CpwError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::NotAnObject => {
                write!(f, "Input must be a JSON object mapping categories to weight arrays")
            }
            CliError::NotAnArray(c) => write!(f, "Category `{c}` is not an array of weights"),
            CliError::NotAWeight(c) => {
                write!(f, "Category `{c}` contains a non-integer or negative weight")
            }
            CliError::UnknownMode(m) => write!(f, "Unknown mode: {m}"),
            CliError::Encode(e) => write!(f, "{e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<CpwError> for CliError {
    fn from(e: CpwError) -> Self {
        CliError::Encode(e)
    }
}

// ── cpw-encode ────────────────────────────────────────────────────────────

/// Parses a JSON weightings object, preserving key order.
pub fn parse_weightings(json: &str) -> Result<TraitWeightings, CliError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(CliError::NotAnObject)?;

    let mut weightings = TraitWeightings::with_capacity(object.len());
    for (category, entry) in object {
        let array = entry
            .as_array()
            .ok_or_else(|| CliError::NotAnArray(category.clone()))?;
        let mut weights = Vec::with_capacity(array.len());
        for weight in array {
            let weight = weight
                .as_u64()
                .ok_or_else(|| CliError::NotAWeight(category.clone()))?;
            weights.push(weight);
        }
        weightings.insert(category.clone(), weights);
    }
    Ok(weightings)
}

/// Encodes a JSON weightings string in the requested mode (`"compatible"`
/// or `"strict"`).
pub fn encode_weightings(json: &str, mode: &str) -> Result<Vec<String>, CliError> {
    let weightings = parse_weightings(json)?;
    let encoder = match mode.to_lowercase().as_str() {
        "compatible" => CpwEncoder::new(),
        "strict" => CpwEncoder::strict(),
        other => return Err(CliError::UnknownMode(other.to_string())),
    };
    Ok(encoder.encode(&weightings)?)
}
