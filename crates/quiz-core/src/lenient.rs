//! Field deserializers that read a JSON value of any shape and keep it only
//! when it has the expected type. A mistyped field becomes absent instead of
//! failing the whole document. `difficulty` is the exception: any present
//! value is kept as is.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{DifficultyContext, RawAnswer, RawDifficulty};

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64())
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_u64())
}

pub(crate) fn list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

pub(crate) fn answers<'de, D>(deserializer: D) -> Result<Vec<RawAnswer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(list(deserializer)?
        .into_iter()
        .map(|item| RawAnswer::deserialize(item).unwrap_or_default())
        .collect())
}

pub(crate) fn difficulty<'de, D>(deserializer: D) -> Result<Option<RawDifficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    // Only reached when the key exists, so an explicit `null` is kept.
    Ok(Some(RawDifficulty::from(Value::deserialize(deserializer)?)))
}

pub(crate) fn context<'de, D>(deserializer: D) -> Result<DifficultyContext, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => DifficultyContext::deserialize(value).unwrap_or_default(),
        _ => DifficultyContext::default(),
    })
}
