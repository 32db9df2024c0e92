//! serde helpers for fields that may be numbers, numeric strings, or junk.
//!
//! Junk never fails deserialization; it becomes `None` so the calculation
//! layer can return its own sentinel.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::number::AsNumber;

/// Deserialize any JSON value into `Option<f64>`, keeping only numeric readings.
///
/// Non-finite results are preserved so that callers can distinguish
/// "present but unusable" if they need to.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_number())
}

/// Deserialize any JSON value into `Option<i64>`, keeping only integral readings.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_number()
        .filter(|n| n.is_finite() && n.fract() == 0.0)
        .map(|n| n as i64))
}
