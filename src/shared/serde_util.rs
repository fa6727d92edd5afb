//! Custom serde helpers for STRATZ wire formats.

/// Deserializes an explicit `null` as `T::default()`.
///
/// STRATZ sends `null` for empty lists on some payloads and omits them on
/// others. Pair with `#[serde(default)]` to cover both.
pub mod null_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
