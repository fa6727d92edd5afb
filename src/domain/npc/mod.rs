//! Npc domain — creeps, summons, buildings.

pub mod client;

use crate::shared::GameVersionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub stat: Option<NpcStat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamName {
    Neutrals,
    BadGuys,
    GoodGuys,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NpcStat {
    pub npc_id: Option<u32>,
    pub game_version_id: Option<GameVersionId>,
    pub level: Option<f64>,
    pub status_health: Option<f64>,
    pub status_health_regen: Option<f64>,
    pub status_mana: Option<f64>,
    pub status_mana_regen: Option<f64>,
    pub movement_speed: Option<f64>,
    pub movement_turn_rate: Option<f64>,
    pub day_time_vision: Option<f64>,
    pub night_time_vision: Option<f64>,
    pub attack_range_buffer: Option<f64>,
    pub attack_range: Option<f64>,
    pub is_neutral_unit_type: Option<bool>,
    pub is_ancient: Option<bool>,
    pub can_be_dominated: Option<bool>,
    pub auto_attacks_by_default: Option<bool>,
    pub attack_damage_min: Option<f64>,
    pub attack_damage_max: Option<f64>,
    pub attack_rate: Option<f64>,
    pub attack_animation_point: Option<f64>,
    pub projectile_speed: Option<f64>,
    pub team_name: Option<TeamName>,
    pub combat_class_attack: Option<String>,
    pub combat_class_defend: Option<String>,
    pub unit_relationship_class: Option<String>,
    pub attack_desire: Option<f64>,
    pub has_inventory: Option<bool>,
    pub wakes_neutrals: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npc_deserialize() {
        let json = r#"{
            "id": 3,
            "name": "npc_dota_creep_goodguys_melee",
            "stat": {"teamName": "GoodGuys", "statusHealth": 550, "unitRelationshipClass": "Default"}
        }"#;
        let npc: Npc = serde_json::from_str(json).unwrap();
        let stat = npc.stat.unwrap();
        assert_eq!(stat.team_name, Some(TeamName::GoodGuys));
        assert_eq!(stat.status_health, Some(550.0));
    }
}
