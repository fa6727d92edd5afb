//! Player domain — profiles, summaries, hero performance and the filters
//! shared by every per-player match listing.

pub mod client;

use crate::shared::{GameVersionId, HeroId, LeagueId, MatchId, SteamAccountId};
use crate::shared::serde_util::null_default;
use serde::{Deserialize, Serialize};

// ─── Profiles ────────────────────────────────────────────────────────────────

/// Steam profile as mirrored by STRATZ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamAccount {
    pub id: SteamAccountId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_uri: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub city_id: Option<u32>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub is_stratz_public: bool,
    #[serde(default)]
    pub is_dota_plus_subscriber: Option<bool>,
    #[serde(default)]
    pub dota_plus_original_start_date: Option<i64>,
    #[serde(default)]
    pub season_rank: Option<u32>,
    #[serde(default)]
    pub solo_rank: Option<u32>,
    #[serde(default)]
    pub party_rank: Option<u32>,
    #[serde(default)]
    pub smurf_flag: Option<u8>,
    #[serde(default)]
    pub smurf_check_date: Option<i64>,
    #[serde(default)]
    pub dota_account_level: Option<u32>,
    #[serde(default)]
    pub last_active_time: Option<String>,
    #[serde(default)]
    pub time_created: Option<i64>,
    #[serde(default)]
    pub community_visible_state: Option<u8>,
    #[serde(default)]
    pub primary_clan_id: Option<u64>,
    #[serde(default)]
    pub last_match_date_time: Option<i64>,
    #[serde(default)]
    pub last_match_region_id: Option<u32>,
}

/// STRATZ account settings attached to a Steam account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub captain_jack_identity_id: Option<String>,
    pub name: Option<String>,
    pub language_id: Option<u32>,
    pub theme_type: Option<u8>,
    pub feed_level: Option<u8>,
    pub email_level: Option<u8>,
    pub is_email_validated: Option<bool>,
    pub daily_email: Option<bool>,
    pub weekly_email: Option<bool>,
    pub monthly_email: Option<bool>,
    pub steam_account_id: Option<SteamAccountId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub steam_account_id: SteamAccountId,
    #[serde(default)]
    pub steam_account: Option<SteamAccount>,
    #[serde(default)]
    pub identity: Option<Identity>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub battle_pass: Vec<BattlePass>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub ranks: Vec<SeasonRank>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub names: Vec<PreviousName>,
    #[serde(default)]
    pub team: Option<PlayerTeam>,
    #[serde(default)]
    pub last_region_id: Option<u32>,
    #[serde(default)]
    pub first_match_date: Option<i64>,
    #[serde(default)]
    pub match_count: Option<u32>,
    #[serde(default)]
    pub win_count: Option<u32>,
    #[serde(default)]
    pub behavior_score: Option<u32>,
    #[serde(default)]
    pub is_followed: Option<bool>,
}

impl Player {
    /// Fraction of recorded matches won, when both counts are known.
    pub fn win_rate(&self) -> Option<f64> {
        match (self.win_count, self.match_count) {
            (Some(w), Some(m)) if m > 0 => Some(f64::from(w) / f64::from(m)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBasic {
    pub steam_account_id: SteamAccountId,
    #[serde(default)]
    pub steam_account: Option<SteamAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePass {
    pub event_id: u32,
    pub level: u32,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub bracket: Option<u32>,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRank {
    pub season_rank_id: u32,
    pub rank: u32,
    #[serde(default)]
    pub is_core: Option<bool>,
    #[serde(default)]
    pub as_of_date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousName {
    pub name: String,
    #[serde(default)]
    pub lastseendatetime: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeam {
    pub team_id: u64,
    #[serde(default)]
    pub first_match_id: Option<MatchId>,
    #[serde(default)]
    pub first_match_date_time: Option<String>,
    #[serde(default)]
    pub last_match_id: Option<MatchId>,
    #[serde(default)]
    pub last_match_date_time: Option<String>,
}

/// Professional player record from `/Player/proSteamAccount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProPlayer {
    pub steam_account_id: SteamAccountId,
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub romanized_real_name: Option<String>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub fantasy_role: Option<u8>,
    #[serde(default)]
    pub position: Option<u8>,
    #[serde(default)]
    pub sponsor: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_pro: bool,
    #[serde(default)]
    pub total_earnings: Option<f64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub countries: Vec<String>,
    #[serde(default)]
    pub ti_wins: Option<u32>,
    #[serde(default, rename = "istiwinner")]
    pub is_ti_winner: Option<bool>,
    #[serde(default)]
    pub twitter_link: Option<String>,
    #[serde(default)]
    pub twitch_link: Option<String>,
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPerformance {
    pub hero_id: HeroId,
    #[serde(default)]
    pub match_count: u32,
    #[serde(default)]
    pub win_count: u32,
    #[serde(default)]
    pub kda: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub imp: Option<f64>,
    #[serde(default)]
    pub best: Option<f64>,
    #[serde(default)]
    pub gold_per_minute: Option<f64>,
    #[serde(default)]
    pub experience_per_minute: Option<f64>,
    #[serde(default)]
    pub avg_kills: Option<f64>,
    #[serde(default)]
    pub avg_deaths: Option<f64>,
    #[serde(default)]
    pub avg_assists: Option<f64>,
    #[serde(default)]
    pub last_played: Option<i64>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub position_score: Vec<PositionScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionScore {
    pub id: u8,
    pub score: f64,
    pub match_count: u32,
    pub win_count: u32,
    #[serde(default)]
    pub imp: Option<f64>,
}

/// Win/loss brief for one bucket of a [`PlayerSummary`] window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchBrief {
    pub id: Option<i64>,
    pub match_count: u32,
    pub win: u32,
    pub gold_per_minute: Option<f64>,
    pub experience_per_minute: Option<f64>,
    pub date: Option<i64>,
    pub imp: Option<f64>,
}

/// Breakdown of a player's matches over one time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryWindow {
    pub matches: MatchBrief,
    pub is_stats_matches: Vec<MatchBrief>,
    pub rank_matches: Vec<MatchBrief>,
    pub lobby_matches: Vec<MatchBrief>,
    pub game_mode_matches: Vec<MatchBrief>,
    pub faction_matches: Vec<MatchBrief>,
    pub region_matches: Vec<MatchBrief>,
    pub lane_matches: Vec<MatchBrief>,
    pub role_matches: Vec<MatchBrief>,
    pub party_matches: Vec<MatchBrief>,
    pub imp_matches: Vec<MatchBrief>,
    pub duration_matches: Vec<MatchBrief>,
    pub hero_attribute_matches: Vec<MatchBrief>,
    pub day_of_week_matches: Vec<MatchBrief>,
    pub time_of_day_matches: Vec<MatchBrief>,
    pub week_end_matches: Vec<MatchBrief>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerSummary {
    pub all_time: SummaryWindow,
    pub six_months: SummaryWindow,
    pub one_month: SummaryWindow,
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// Match filters shared by the per-player endpoints.
///
/// Used as-is for `/Player/{id}/heroPerformance` and `/Player/{id}/summary`,
/// and flattened into [`MatchQuery`] for `/Player/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFilter {
    pub match_id: Option<Vec<MatchId>>,
    pub hero_id: Option<Vec<HeroId>>,
    pub league_id: Option<LeagueId>,
    pub series_id: Option<u64>,
    pub team_id: Option<u64>,
    pub is_parsed: Option<bool>,
    pub is_league: Option<bool>,
    pub has_award: Option<bool>,
    pub is_stats: Option<bool>,
    pub is_victory: Option<bool>,
    pub game_mode: Option<Vec<String>>,
    pub lobby_type: Option<Vec<String>>,
    pub game_version_id: Option<Vec<GameVersionId>>,
    pub with_friends: Option<Vec<SteamAccountId>>,
    pub with_friends_hero: Option<Vec<HeroId>>,
    /// 0 roaming, 1 safe, 2 mid, 3 off, 4 jungle, 255 unknown
    pub lane: Option<Vec<u8>>,
    pub role: Option<u8>,
    pub tier: Option<u8>,
    pub region: Option<Vec<u8>>,
    pub rank: Option<Vec<u8>>,
    /// Minutes
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    pub min_game_version_id: Option<GameVersionId>,
    pub max_game_version_id: Option<GameVersionId>,
    /// Unix seconds
    pub start_date_time: Option<i64>,
    pub end_date_time: Option<i64>,
    pub is_party: Option<bool>,
    pub party_count: Option<Vec<u8>>,
    pub is_radiant: Option<bool>,
    /// 0 none, 1 MVP, 2 top core, 3 top support
    pub award: Option<Vec<u8>>,
    pub is_team: Option<bool>,
    pub skip: Option<u32>,
    /// Max results (1-100)
    pub take: Option<u32>,
}

pub type HeroPerformanceQuery = MatchFilter;
pub type PlayerSummaryQuery = MatchFilter;

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_ids(mut self, ids: Vec<MatchId>) -> Self {
        self.match_id = Some(ids);
        self
    }

    pub fn with_hero_ids(mut self, ids: Vec<HeroId>) -> Self {
        self.hero_id = Some(ids);
        self
    }

    pub fn with_league_id(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn with_parsed(mut self, is_parsed: bool) -> Self {
        self.is_parsed = Some(is_parsed);
        self
    }

    pub fn with_victory(mut self, is_victory: bool) -> Self {
        self.is_victory = Some(is_victory);
        self
    }

    pub fn with_game_modes<S: Into<String>>(mut self, modes: impl IntoIterator<Item = S>) -> Self {
        self.game_mode = Some(modes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_lobby_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.lobby_type = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_game_versions(mut self, ids: Vec<GameVersionId>) -> Self {
        self.game_version_id = Some(ids);
        self
    }

    pub fn with_friends(mut self, steam_ids: Vec<SteamAccountId>) -> Self {
        self.with_friends = Some(steam_ids);
        self
    }

    pub fn with_lanes(mut self, lanes: Vec<u8>) -> Self {
        self.lane = Some(lanes);
        self
    }

    pub fn with_role(mut self, role: u8) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_ranks(mut self, ranks: Vec<u8>) -> Self {
        self.rank = Some(ranks);
        self
    }

    pub fn with_duration(mut self, min_minutes: u32, max_minutes: u32) -> Self {
        self.min_duration = Some(min_minutes);
        self.max_duration = Some(max_minutes);
        self
    }

    pub fn with_time_range(mut self, start: i64, end: i64) -> Self {
        self.start_date_time = Some(start);
        self.end_date_time = Some(end);
        self
    }

    pub fn with_radiant(mut self, is_radiant: bool) -> Self {
        self.is_radiant = Some(is_radiant);
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

/// Query parameters for GET /Player/{id}/matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    /// Extra sections to embed (`Player`, `PickBan`, `GameVersion`, ...)
    pub include: Option<Vec<String>>,
    #[serde(flatten)]
    pub filter: MatchFilter,
    /// Comma-separated steam ids that all must appear in the match
    pub player_list: Option<String>,
}

impl MatchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: MatchFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_include<S: Into<String>>(mut self, include: impl IntoIterator<Item = S>) -> Self {
        self.include = Some(include.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_player_list(mut self, steam_ids: &[SteamAccountId]) -> Self {
        let list = steam_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.player_list = Some(list);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.filter.skip = Some(skip);
        self
    }

    pub fn with_take(mut self, take: u32) -> Self {
        self.filter.take = Some(take);
        self
    }
}

impl From<MatchFilter> for MatchQuery {
    fn from(filter: MatchFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::QueryParams;

    #[test]
    fn test_player_deserialize() {
        let json = r#"{
            "steamAccountId": 282424658,
            "steamAccount": {"id": 282424658, "name": "someone", "isAnonymous": false},
            "matchCount": 200,
            "winCount": 110,
            "names": [{"name": "old", "lastseendatetime": 1600000000}]
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.steam_account.as_ref().unwrap().name.as_deref(), Some("someone"));
        assert_eq!(player.win_rate(), Some(0.55));
        assert_eq!(player.names[0].name, "old");
        assert!(player.battle_pass.is_empty());
    }

    #[test]
    fn test_win_rate_without_matches() {
        let player: Player = serde_json::from_str(r#"{"steamAccountId": 1, "matchCount": 0, "winCount": 0}"#).unwrap();
        assert_eq!(player.win_rate(), None);
    }

    #[test]
    fn test_summary_defaults_missing_windows() {
        let json = r#"{"allTime": {"matches": {"matchCount": 10, "win": 6}}}"#;
        let summary: PlayerSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.all_time.matches.win, 6);
        assert_eq!(summary.one_month.matches.match_count, 0);
    }

    #[test]
    fn test_hero_performance_deserialize() {
        let json = r#"{"heroId": 14, "matchCount": 40, "winCount": 22, "kda": 3.1,
                       "positionScore": [{"id": 4, "score": 0.5, "matchCount": 3, "winCount": 2}]}"#;
        let perf: HeroPerformance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.hero_id, 14);
        assert_eq!(perf.position_score[0].id, 4);
    }

    #[test]
    fn test_match_query_flattens_filter() {
        let query = MatchQuery::new()
            .with_include(["Player"])
            .with_filter(MatchFilter::new().with_hero_ids(vec![14, 1]).with_parsed(true))
            .with_player_list(&[1, 2])
            .with_take(5);
        let params = QueryParams::from_serialize(&query).unwrap();
        let pairs = params.pairs();
        assert!(pairs.contains(&("include", "Player")));
        assert!(pairs.contains(&("heroId", "14")));
        assert!(pairs.contains(&("heroId", "1")));
        assert!(pairs.contains(&("isParsed", "true")));
        assert!(pairs.contains(&("playerList", "1,2")));
        assert!(pairs.contains(&("take", "5")));
        assert!(!pairs.iter().any(|(k, _)| *k == "skip"));
    }

    #[test]
    fn test_hero_performance_query_has_no_include() {
        let query: HeroPerformanceQuery = MatchFilter::new().with_duration(20, 40);
        let encoded = QueryParams::from_serialize(&query).unwrap().to_query_string();
        assert_eq!(encoded, "minDuration=20&maxDuration=40");
    }
}
