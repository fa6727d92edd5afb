//! Search domain — free-text search across players, leagues, teams and matches.

pub mod client;

use serde::Serialize;

/// Leaderboard region filter for player search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardRegion {
    Americas = 0,
    Europe = 1,
    SeAsia = 2,
    China = 3,
}

impl Serialize for LeaderboardRegion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Query parameters for GET /search/player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchByPlayerQuery {
    /// Search term (required, non-empty)
    pub query: String,
    pub min_rank: Option<u8>,
    pub max_rank: Option<u8>,
    pub leaderboard_region: Option<Vec<LeaderboardRegion>>,
    /// Days since the player was last seen
    pub last_seen: Option<u32>,
    /// Max results (1-100)
    pub take: Option<u32>,
}

impl SearchByPlayerQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_rank_range(mut self, min: u8, max: u8) -> Self {
        self.min_rank = Some(min);
        self.max_rank = Some(max);
        self
    }

    pub fn with_leaderboard_regions(mut self, regions: Vec<LeaderboardRegion>) -> Self {
        self.leaderboard_region = Some(regions);
        self
    }

    pub fn with_last_seen(mut self, days: u32) -> Self {
        self.last_seen = Some(days);
        self
    }

    pub fn with_take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }
}

/// Query parameters for GET /search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Search term (required, non-empty)
    pub query: String,
    pub min_rank: Option<u8>,
    pub max_rank: Option<u8>,
    pub leaderboard_region: Option<Vec<LeaderboardRegion>>,
    pub last_seen: Option<u32>,
    /// League tiers 1-5
    pub tiers: Option<Vec<u8>>,
    pub is_pro: Option<bool>,
    pub take: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_rank_range(mut self, min: u8, max: u8) -> Self {
        self.min_rank = Some(min);
        self.max_rank = Some(max);
        self
    }

    pub fn with_leaderboard_regions(mut self, regions: Vec<LeaderboardRegion>) -> Self {
        self.leaderboard_region = Some(regions);
        self
    }

    pub fn with_last_seen(mut self, days: u32) -> Self {
        self.last_seen = Some(days);
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<u8>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    pub fn with_pro(mut self, is_pro: bool) -> Self {
        self.is_pro = Some(is_pro);
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
    fn test_search_query_string() {
        let query = SearchQuery::new("alliance")
            .with_tiers(vec![1, 2])
            .with_pro(true);
        let encoded = QueryParams::from_serialize(&query).unwrap().to_query_string();
        assert_eq!(encoded, "query=alliance&tiers=1&tiers=2&isPro=true");
    }

    #[test]
    fn test_player_search_regions_are_numeric() {
        let query = SearchByPlayerQuery::new("282424658")
            .with_leaderboard_regions(vec![LeaderboardRegion::Europe, LeaderboardRegion::China]);
        let encoded = QueryParams::from_serialize(&query).unwrap().to_query_string();
        assert_eq!(encoded, "query=282424658&leaderboardRegion=1&leaderboardRegion=3");
    }
}
