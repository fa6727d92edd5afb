//! Shared identifiers, the `Language` enum and the ordered `IdMap` used by
//! every constant-data endpoint.

pub mod serde_util;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Identifiers ─────────────────────────────────────────────────────────────

pub type HeroId = u16;
pub type AbilityId = u32;
pub type ItemId = u32;
pub type LeagueId = u32;
pub type GameVersionId = u32;
pub type MatchId = u64;
pub type SteamAccountId = u64;

// ─── Language ────────────────────────────────────────────────────────────────

/// Localisation of constant data. Sent as the numeric `languageId`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Brazilian,
    Bulgarian,
    Czech,
    Danish,
    Dutch,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    Korean,
    Koreana,
    Norwegian,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    SimplifiedChinese,
    Spanish,
    Swedish,
    TraditionalChinese,
    Thai,
    Turkish,
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 27] = [
        Language::English,
        Language::Brazilian,
        Language::Bulgarian,
        Language::Czech,
        Language::Danish,
        Language::Dutch,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Hungarian,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Koreana,
        Language::Norwegian,
        Language::Polish,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::SimplifiedChinese,
        Language::Spanish,
        Language::Swedish,
        Language::TraditionalChinese,
        Language::Thai,
        Language::Turkish,
        Language::Ukrainian,
    ];

    /// Numeric id expected by the API.
    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.id())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        Language::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language id {id}")))
    }
}

// ─── IdMap ───────────────────────────────────────────────────────────────────

/// A JSON object keyed by stringified entity id, kept in server order.
///
/// The constant-data endpoints (`/Hero`, `/Ability`, `/Item`, `/Npc`) answer
/// with `{"1": {...}, "2": {...}}`. Iteration follows the order the server
/// sent; duplicate keys keep the last value in the first key's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdMap<T>(IndexMap<String, T>);

impl<T> Default for IdMap<T> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<T> IdMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.get(key)
    }

    /// Look up by numeric id, stringified the way the server keys the map.
    pub fn get_id(&self, id: impl fmt::Display) -> Option<&T> {
        self.get(&id.to_string())
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }
}

impl<T> IntoIterator for IdMap<T> {
    type Item = (String, T);
    type IntoIter = indexmap::map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for IdMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serializes_as_id() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Language::Russian).unwrap(), "19");
        let lang: Language = serde_json::from_str("26").unwrap();
        assert_eq!(lang, Language::Ukrainian);
        assert!(serde_json::from_str::<Language>("99").is_err());
    }

    #[test]
    fn test_language_default_is_english() {
        assert_eq!(Language::default().id(), 0);
        assert_eq!(Language::from_id(7), Some(Language::French));
    }

    #[test]
    fn test_id_map_keeps_server_order() {
        let map: IdMap<u32> = serde_json::from_str(r#"{"14": 1, "1": 2, "102": 3}"#).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["14", "1", "102"]);
        assert_eq!(map.get_id(1), Some(&2));
        assert_eq!(map.get("999"), None);
    }

    #[test]
    fn test_id_map_duplicate_key_keeps_last_value() {
        let map: IdMap<u32> = serde_json::from_str(r#"{"1": 1, "2": 2, "1": 3}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("1"), Some(&3));
        assert_eq!(map.keys().next(), Some("1"));
    }

    #[test]
    fn test_id_map_remove_keeps_order() {
        let mut map: IdMap<&str> = vec![("1", "a"), ("2", "b"), ("3", "c")].into_iter().collect();
        assert_eq!(map.remove("1"), Some("a"));
        assert_eq!(map.get("3"), Some(&"c"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["2", "3"]);
        assert_eq!(map.remove("1"), None);
    }

    #[test]
    fn test_id_map_serializes_in_order() {
        let map: IdMap<u32> = vec![("5", 1), ("2", 2)].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"5":1,"2":2}"#);
    }
}
