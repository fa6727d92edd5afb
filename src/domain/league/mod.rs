//! League domain — leagues, their series and the query objects that page them.

pub mod client;

use crate::domain::matches::Match;
use crate::shared::{LeagueId, SteamAccountId};
use crate::shared::serde_util::null_default;
use serde::{Deserialize, Serialize};

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: LeagueId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub tier: Option<u8>,
    #[serde(default)]
    pub region: Option<u8>,
    #[serde(default)]
    pub status: Option<u8>,
    #[serde(default)]
    pub base_prize_pool: Option<u64>,
    #[serde(default)]
    pub prize_pool: Option<u64>,
    #[serde(default)]
    pub start_date_time: Option<i64>,
    #[serde(default)]
    pub end_date_time: Option<i64>,
    #[serde(default)]
    pub last_match_date_time: Option<i64>,
    #[serde(default)]
    pub tournament_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "pro_circuit_points")]
    pub pro_circuit_points: Option<u32>,
    #[serde(default, rename = "registration_period")]
    pub registration_period: Option<i64>,
    #[serde(default)]
    pub is_followed: Option<bool>,
}

/// A best-of-N between two teams inside a league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: u64,
    #[serde(default, rename = "type")]
    pub kind: Option<u8>,
    #[serde(default)]
    pub team_one_id: Option<u64>,
    #[serde(default)]
    pub team_two_id: Option<u64>,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    #[serde(default)]
    pub team_one_win_count: Option<u8>,
    #[serde(default)]
    pub team_two_win_count: Option<u8>,
    #[serde(default)]
    pub winning_team_id: Option<u64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub last_match_date: Option<i64>,
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// Sort order for [`LeaguesQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeagueOrder {
    LastMatchTime,
    Id,
}

/// Query parameters for GET /League.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesQuery {
    /// Tiers 0-9 (1 amateur, 2 professional, 3 DPC minor, 4 DPC major, ...)
    pub tier: Option<Vec<u8>>,
    pub skip: Option<u32>,
    /// Max results (1-100)
    pub take: Option<u32>,
    pub require_image: Option<bool>,
    /// Server default is `LastMatchTime`
    pub order_by: Option<LeagueOrder>,
}

impl LeaguesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tiers(mut self, tiers: Vec<u8>) -> Self {
        self.tier = Some(tiers);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }

    pub fn with_require_image(mut self, require_image: bool) -> Self {
        self.require_image = Some(require_image);
        self
    }

    pub fn with_order_by(mut self, order_by: LeagueOrder) -> Self {
        self.order_by = Some(order_by);
        self
    }
}

/// Query parameters for GET /League/{id}/matches and /League/{id}/series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMatchesQuery {
    pub include: Option<Vec<String>>,
    pub steam_id: Option<SteamAccountId>,
    pub series_id: Option<u64>,
    pub team_id: Option<u64>,
    pub is_parsed: Option<bool>,
    pub is_league: Option<bool>,
    pub has_award: Option<bool>,
    pub is_stats: Option<bool>,
    pub stage_type: Option<Vec<String>>,
    pub game_mode: Option<String>,
    pub lobby_type: Option<String>,
    pub game_version: Option<Vec<u32>>,
    pub skip: Option<u32>,
    pub take: Option<u32>,
}

impl LeagueMatchesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include<S: Into<String>>(mut self, include: impl IntoIterator<Item = S>) -> Self {
        self.include = Some(include.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_steam_id(mut self, steam_id: SteamAccountId) -> Self {
        self.steam_id = Some(steam_id);
        self
    }

    pub fn with_team_id(mut self, team_id: u64) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_series_id(mut self, series_id: u64) -> Self {
        self.series_id = Some(series_id);
        self
    }

    pub fn with_parsed(mut self, is_parsed: bool) -> Self {
        self.is_parsed = Some(is_parsed);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::QueryParams;

    #[test]
    fn test_league_deserialize() {
        let json = r#"{
            "id": 4122,
            "displayName": "The International 2016",
            "tier": 4,
            "prizePool": 20770460,
            "pro_circuit_points": 0,
            "isFollowed": false
        }"#;
        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.id, 4122);
        assert_eq!(league.prize_pool, Some(20_770_460));
        assert_eq!(league.pro_circuit_points, Some(0));
        assert!(league.end_date_time.is_none());
    }

    #[test]
    fn test_series_deserialize() {
        let json = r#"{"id": 1, "type": 2, "teamOneWinCount": 2, "matches": [{"id": 7}]}"#;
        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.kind, Some(2));
        assert_eq!(series.matches.len(), 1);
    }

    #[test]
    fn test_leagues_query_string() {
        let query = LeaguesQuery::new()
            .with_tiers(vec![2, 3])
            .with_take(10)
            .with_order_by(LeagueOrder::Id);
        let params = QueryParams::from_serialize(&query).unwrap();
        assert_eq!(params.to_query_string(), "tier=2&tier=3&take=10&orderBy=Id");
    }

    #[test]
    fn test_empty_league_matches_query_has_no_params() {
        let params = QueryParams::from_serialize(&LeagueMatchesQuery::new()).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_league_matches_query_lists() {
        let query = LeagueMatchesQuery::new()
            .with_include(["Player", "PickBan"])
            .with_steam_id(282424658);
        let params = QueryParams::from_serialize(&query).unwrap();
        assert_eq!(
            params.to_query_string(),
            "include=Player&include=PickBan&steamId=282424658"
        );
    }
}
