//! Serde helpers for lenient backend payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, treating an explicit `null` like a missing field.
///
/// Pair with `#[serde(default)]` so absent and `null` values both yield
/// `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
