//! Constant reference data — game versions, regions and the smaller
//! lookup tables (languages, clusters, game modes, lobby types, patch notes).

pub mod client;

use crate::shared::GameVersionId;
use serde::{Deserialize, Serialize};

/// One Dota 2 game version. `/GameVersion` lists them newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameVersion {
    pub id: GameVersionId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_date_time: Option<i64>,
}

/// Leaderboard division a region reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardDivision {
    Americas,
    Europe,
    SeAsia,
    China,
}

/// A matchmaking region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub lang_key: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub match_group: u32,
    pub client_name: Option<String>,
    pub leaderboard_division: Option<LeaderboardDivision>,
    pub code: Option<String>,
    pub weekend_tourney_division: Option<String>,
}
