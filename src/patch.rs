use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// One field of a partial update body.
///
/// Distinguishes a key that was left out (`Absent`) from one sent as
/// `null`. Fields must be marked `#[serde(default)]` so a missing key
/// deserializes to `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

impl Patch<Value> {
    /// Resolves a NOT NULL text column: `None` keeps the stored value.
    ///
    /// Any present value overwrites, empty strings included; only `null`
    /// is refused.
    pub fn into_column_text(self, field: &str) -> AppResult<Option<String>> {
        match self {
            Patch::Absent => Ok(None),
            Patch::Null | Patch::Value(Value::Null) => {
                Err(AppError::validation(format!("{field} cannot be null")))
            }
            Patch::Value(v) => Ok(Some(text_form(v))),
        }
    }
}

/// JSON falsiness: null, `false`, zero, `""`, `[]` and `{}`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Text stored for a JSON value: strings as-is, anything else as JSON text.
pub fn text_form(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Presence check for create bodies: a missing or falsy value counts as absent.
pub fn present(value: Option<Value>) -> Option<String> {
    value.filter(|v| !is_falsy(v)).map(text_form)
}
