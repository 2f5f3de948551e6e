//! JSON helpers shared by the writer and the report renderer.

use serde::Serialize;
use serde_json::Value;

use crate::errors::{ErrorInfo, QuizError};

fn map_err(err: serde_json::Error, code: &str) -> QuizError {
    QuizError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a value as pretty JSON with object keys sorted, so two runs
/// over the same input produce identical bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, QuizError> {
    let value: Value =
        serde_json::to_value(value).map_err(|err| map_err(err, "quiz_core.canonical_json"))?;
    let mut bytes = serde_json::to_vec_pretty(&value)
        .map_err(|err| map_err(err, "quiz_core.canonical_json"))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialises a value as pretty JSON, keeping declared field order.
pub fn to_pretty_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, QuizError> {
    serde_json::to_vec_pretty(value).map_err(|err| map_err(err, "quiz_core.pretty_json"))
}
