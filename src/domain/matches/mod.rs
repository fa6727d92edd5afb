//! Match domain — match payloads, per-player lines, draft and lane data.
//!
//! The same [`Match`] shape serves `/match/{id}`, `/match/{id}/breakdown`,
//! league listings and player match histories. Fields that only some of those
//! endpoints fill are optional; deep replay data is kept as raw JSON.

pub mod client;

use crate::domain::player::SteamAccount;
use crate::shared::{AbilityId, GameVersionId, HeroId, ItemId, LeagueId, MatchId, SteamAccountId};
use crate::shared::serde_util::null_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    #[serde(default)]
    pub did_radiant_win: Option<bool>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub start_date_time: Option<i64>,
    #[serde(default)]
    pub end_date_time: Option<i64>,
    #[serde(default)]
    pub cluster_id: Option<u32>,
    #[serde(default)]
    pub first_blood_time: Option<i32>,
    #[serde(default)]
    pub lobby_type: Option<u32>,
    #[serde(default)]
    pub num_human_players: Option<u8>,
    #[serde(default)]
    pub game_mode: Option<u32>,
    #[serde(default)]
    pub is_stats: Option<bool>,
    #[serde(default)]
    pub avg_imp: Option<f64>,
    #[serde(default)]
    pub parsed_date_time: Option<i64>,
    #[serde(default)]
    pub stats_date_time: Option<i64>,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    #[serde(default)]
    pub radiant_team_id: Option<u64>,
    #[serde(default)]
    pub dire_team_id: Option<u64>,
    #[serde(default)]
    pub series_id: Option<u64>,
    #[serde(default)]
    pub game_version_id: Option<GameVersionId>,
    #[serde(default)]
    pub region_id: Option<u32>,
    #[serde(default)]
    pub sequence_num: Option<u64>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub bracket: Option<u32>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub pick_bans: Vec<PickBan>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub players: Vec<MatchPlayer>,
    #[serde(default)]
    pub analysis_outcome: Option<i32>,
    #[serde(default)]
    pub predicted_outcome_weight: Option<f64>,
    #[serde(default)]
    pub bottom_lane_outcome: Option<i32>,
    #[serde(default)]
    pub mid_lane_outcome: Option<i32>,
    #[serde(default)]
    pub top_lane_outcome: Option<i32>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub radiant_networth_lead: Vec<i64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub radiant_experience_lead: Vec<i64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub radiant_kills: Vec<u32>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub dire_kills: Vec<u32>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub tower_status: Vec<serde_json::Value>,
    #[serde(default)]
    pub lane_report: Option<LaneReport>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub win_rates: Vec<f64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub predicted_win_rates: Vec<f64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub tower_deaths: Vec<TowerDeath>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub chat_events: Vec<ChatEvent>,
    #[serde(default)]
    pub did_request_download: Option<bool>,
    /// Replay timeline, present on `/match/{id}/breakdown`.
    #[serde(default)]
    pub playback_data: Option<serde_json::Value>,
}

impl Match {
    pub fn radiant(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(|p| p.is_radiant)
    }

    pub fn dire(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(|p| !p.is_radiant)
    }

    pub fn player(&self, steam_account_id: SteamAccountId) -> Option<&MatchPlayer> {
        self.players
            .iter()
            .find(|p| p.steam_account_id == Some(steam_account_id))
    }
}

/// One player's line in a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayer {
    #[serde(default)]
    pub match_id: Option<MatchId>,
    #[serde(default)]
    pub player_slot: Option<u8>,
    pub hero_id: HeroId,
    /// Absent for anonymous players.
    #[serde(default)]
    pub steam_account_id: Option<SteamAccountId>,
    #[serde(default)]
    pub is_radiant: bool,
    #[serde(default)]
    pub is_victory: Option<bool>,
    #[serde(default)]
    pub num_kills: u32,
    #[serde(default)]
    pub num_deaths: u32,
    #[serde(default)]
    pub num_assists: u32,
    #[serde(default)]
    pub num_last_hits: Option<u32>,
    #[serde(default)]
    pub num_denies: Option<u32>,
    #[serde(default)]
    pub leaver_status: Option<u8>,
    #[serde(default)]
    pub gold_per_minute: Option<u32>,
    #[serde(default)]
    pub experience_per_minute: Option<u32>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub gold: Option<u32>,
    #[serde(default)]
    pub gold_spent: Option<u32>,
    #[serde(default)]
    pub networth: Option<u32>,
    #[serde(default)]
    pub hero_damage: Option<u32>,
    #[serde(default)]
    pub tower_damage: Option<u32>,
    #[serde(default)]
    pub hero_healing: Option<u32>,
    #[serde(default)]
    pub party_id: Option<u32>,
    #[serde(default)]
    pub is_random: Option<bool>,
    #[serde(default)]
    pub lane: Option<u8>,
    #[serde(default)]
    pub roam_lane: Option<u8>,
    #[serde(default)]
    pub role: Option<u8>,
    #[serde(default)]
    pub intentional_feeding: Option<bool>,
    #[serde(default)]
    pub imp: Option<i32>,
    #[serde(default)]
    pub award: Option<u8>,
    #[serde(default)]
    pub behavior: Option<i32>,
    #[serde(default)]
    pub item0_id: Option<ItemId>,
    #[serde(default)]
    pub item1_id: Option<ItemId>,
    #[serde(default)]
    pub item2_id: Option<ItemId>,
    #[serde(default)]
    pub item3_id: Option<ItemId>,
    #[serde(default)]
    pub item4_id: Option<ItemId>,
    #[serde(default)]
    pub item5_id: Option<ItemId>,
    #[serde(default)]
    pub backpack0_id: Option<ItemId>,
    #[serde(default)]
    pub backpack1_id: Option<ItemId>,
    #[serde(default)]
    pub backpack2_id: Option<ItemId>,
    #[serde(default)]
    pub neutral0_id: Option<ItemId>,
    #[serde(default)]
    pub dota_plus_hero_xp: Option<u32>,
    #[serde(default)]
    pub invisible_seconds: Option<u32>,
    #[serde(default)]
    pub streak_prediction: Option<i32>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub abilities: Vec<AbilityLearn>,
    #[serde(default)]
    pub steam_account: Option<SteamAccount>,
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
    #[serde(default)]
    pub playback_data: Option<serde_json::Value>,
}

impl MatchPlayer {
    /// Main inventory slots, empty slots skipped.
    pub fn items(&self) -> Vec<ItemId> {
        [
            self.item0_id,
            self.item1_id,
            self.item2_id,
            self.item3_id,
            self.item4_id,
            self.item5_id,
        ]
        .into_iter()
        .flatten()
        .filter(|&id| id != 0)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityLearn {
    pub ability_id: AbilityId,
    pub time: i32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickBan {
    pub is_pick: bool,
    #[serde(default)]
    pub hero_id: Option<HeroId>,
    #[serde(default)]
    pub banned_hero_id: Option<HeroId>,
    #[serde(default)]
    pub is_radiant: Option<bool>,
    #[serde(default)]
    pub player_index: Option<u8>,
    #[serde(default)]
    pub was_banned_successfully: Option<bool>,
    #[serde(default)]
    pub order: Option<u8>,
    #[serde(default)]
    pub base_win_rate: Option<f64>,
    #[serde(default)]
    pub adjusted_win_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEvent {
    pub time: i32,
    #[serde(rename = "type")]
    pub kind: u32,
    #[serde(default)]
    pub from_hero_id: Option<HeroId>,
    #[serde(default)]
    pub to_hero_id: Option<HeroId>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub paused_tick: Option<i64>,
    #[serde(default)]
    pub is_radiant: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerDeath {
    pub time: i32,
    pub npc_id: u32,
    pub is_radiant: bool,
    #[serde(default)]
    pub attacker: Option<u32>,
}

/// Creep kills per lane, one entry per minute block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneReport {
    pub radiant: Vec<LaneBreakdown>,
    pub dire: Vec<LaneBreakdown>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaneBreakdown {
    pub mid_lane: LaneCreeps,
    pub off_lane: LaneCreeps,
    pub safe_lane: LaneCreeps,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaneCreeps {
    pub melee_count: u32,
    pub range_count: u32,
    pub siege_count: u32,
    pub deny_count: u32,
    pub neutral_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        let json = r#"{
            "id": 7012302987,
            "didRadiantWin": true,
            "durationSeconds": 2104,
            "gameVersionId": 169,
            "pickBans": [{"isPick": true, "heroId": 14, "order": 1}],
            "players": [
                {"heroId": 14, "steamAccountId": 282424658, "isRadiant": true,
                 "numKills": 9, "numDeaths": 3, "numAssists": 12,
                 "item0Id": 1, "item1Id": 0, "item3Id": 36},
                {"heroId": 1, "isRadiant": false, "numKills": 2, "numDeaths": 8, "numAssists": 1}
            ],
            "laneReport": {"radiant": [{"midLane": {"meleeCount": 4}}], "dire": []},
            "chatEvents": [{"time": 10, "type": 11, "value": 1}]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_match_deserialize() {
        let m = sample();
        assert_eq!(m.id, 7_012_302_987);
        assert_eq!(m.did_radiant_win, Some(true));
        assert_eq!(m.pick_bans[0].hero_id, Some(14));
        assert_eq!(m.chat_events[0].kind, 11);
        assert!(m.tower_deaths.is_empty());
        let lanes = m.lane_report.unwrap();
        assert_eq!(lanes.radiant[0].mid_lane.melee_count, 4);
        assert_eq!(lanes.radiant[0].safe_lane, LaneCreeps::default());
    }

    #[test]
    fn test_player_lookup_and_sides() {
        let m = sample();
        assert_eq!(m.radiant().count(), 1);
        assert_eq!(m.dire().count(), 1);
        let pudge = m.player(282424658).unwrap();
        assert_eq!(pudge.hero_id, 14);
        assert_eq!(pudge.items(), vec![1, 36]);
        assert!(m.player(1).is_none());
    }
}
