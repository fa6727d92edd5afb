//! Ability domain — hero and item abilities, with localised text.

pub mod client;

use crate::shared::{AbilityId, GameVersionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: AbilityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Option<AbilityLanguage>,
    #[serde(default)]
    pub stat: Option<AbilityStat>,
    #[serde(default)]
    pub is_talent: bool,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Ability {
    /// Localised display name, falling back to the internal name.
    pub fn label(&self) -> Option<&str> {
        self.language
            .as_ref()
            .and_then(|l| l.display_name.as_deref())
            .or(self.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityLanguage {
    pub ability_id: Option<AbilityId>,
    pub game_version_id: Option<GameVersionId>,
    pub language_id: Option<u32>,
    pub display_name: Option<String>,
    pub description: Vec<String>,
    pub attributes: Vec<serde_json::Value>,
    pub notes: Vec<String>,
    pub lore: Option<String>,
    pub shard_description: Option<String>,
    pub aghanim_description: Option<String>,
}

/// Numeric ability data. Per-level values are arrays indexed by level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityStat {
    pub ability_id: Option<AbilityId>,
    pub game_version_id: Option<GameVersionId>,
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub behavior: Option<i64>,
    pub unit_target_type: Option<i64>,
    pub unit_target_team: Option<i64>,
    pub unit_target_flags: Option<i64>,
    pub unit_damage_type: Option<i64>,
    pub spell_immunity: Option<i64>,
    pub is_on_castbar: Option<bool>,
    pub is_on_learnbar: Option<bool>,
    pub is_granted_by_scepter: Option<bool>,
    pub has_scepter_upgrade: Option<bool>,
    pub is_granted_by_shard: Option<bool>,
    pub has_shard_upgrade: Option<bool>,
    pub is_ultimate: Option<bool>,
    pub max_level: Option<u32>,
    pub required_level: Option<u32>,
    pub levels_between_upgrade: Option<u32>,
    pub dispellable: Option<i64>,
    pub duration: Option<String>,
    pub charges: Option<String>,
    pub charge_restore_time: Option<String>,
    pub cast_range: Option<Vec<f64>>,
    pub cast_point: Option<Vec<f64>>,
    pub cooldown: Option<Vec<f64>>,
    pub mana_cost: Option<Vec<f64>>,
    pub channel_time: Option<Vec<f64>>,
    pub damage: Option<Vec<f64>>,
    pub linked_ability_id: Option<AbilityId>,
    pub hot_key_override: Option<String>,
}

/// Reduced `(id, name)` projection returned by [`Abilities::list`](client::Abilities::list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySummary {
    pub id: AbilityId,
    pub name: Option<String>,
}

impl From<&Ability> for AbilitySummary {
    fn from(ability: &Ability) -> Self {
        Self {
            id: ability.id,
            name: ability.label().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_deserialize() {
        let json = r#"{
            "id": 9627,
            "name": "special_bonus_unique_pudge_1",
            "isTalent": true,
            "language": {"displayName": "+1 Flesh Heap", "description": [], "notes": []},
            "stat": {"type": 1, "cooldown": [12, 10.5], "isUltimate": false}
        }"#;
        let ability: Ability = serde_json::from_str(json).unwrap();
        assert!(ability.is_talent);
        assert_eq!(ability.label(), Some("+1 Flesh Heap"));
        let stat = ability.stat.unwrap();
        assert_eq!(stat.kind, Some(1));
        assert_eq!(stat.cooldown, Some(vec![12.0, 10.5]));
    }

    #[test]
    fn test_summary_without_names() {
        let ability: Ability = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        let summary = AbilitySummary::from(&ability);
        assert_eq!(summary.id, 5);
        assert_eq!(summary.name, None);
    }
}
