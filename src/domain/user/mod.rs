//! User domain — the account the bearer token belongs to.

pub mod client;

use crate::domain::matches::Match;
use crate::domain::player::{Identity, SteamAccount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub steam_account: Option<SteamAccount>,
    #[serde(default)]
    pub profile: Option<Identity>,
    #[serde(default)]
    pub recent_match: Option<Match>,
    #[serde(default)]
    pub following_count: u32,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub following_league_count: u32,
    #[serde(default)]
    pub following_team_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "steamAccount": {"id": 282424658, "name": "someone"},
            "profile": {"name": "someone", "languageId": 0},
            "recentMatch": {"id": 7012302987, "players": []},
            "followerCount": 3
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.steam_account.unwrap().id, 282424658);
        assert_eq!(user.recent_match.unwrap().id, 7012302987);
        assert_eq!(user.follower_count, 3);
        assert_eq!(user.following_count, 0);
    }
}
