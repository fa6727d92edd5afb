//! Heroes sub-client — hero list, lookup by id, projections.

use crate::client::StratzClient;
use crate::domain::hero::{DotaPlusLeaderboard, Hero, HeroSummary};
use crate::error::StratzError;
use crate::http::Resolved;
use crate::shared::{GameVersionId, HeroId, IdMap, Language};

/// Sub-client for hero data.
pub struct Heroes<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Heroes<'a> {
    /// Every hero, keyed by stringified hero id.
    ///
    /// `language` defaults to English, `game_version_id` to the latest version.
    pub async fn all(
        &self,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<IdMap<Hero>>, StratzError> {
        let query = self.client.localized_query(language, game_version_id).await?;
        self.client.http.get("/Hero", Some(&query)).await
    }

    /// One hero, picked out of [`all`](Self::all). `Ok(None)` when the id is unknown.
    pub async fn get(
        &self,
        hero_id: Option<HeroId>,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<Option<Hero>>, StratzError> {
        let id = hero_id.ok_or(StratzError::MissingArgument("hero_id"))?;
        let heroes = self.all(language, game_version_id).await?;
        Ok(heroes.map(|mut map| map.remove(&id.to_string())))
    }

    /// `(id, name)` pairs in the order the server lists heroes.
    pub async fn list(
        &self,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<Vec<HeroSummary>>, StratzError> {
        let heroes = self.all(language, game_version_id).await?;
        Ok(heroes.map(|map| map.values().map(HeroSummary::from).collect()))
    }

    /// Dota Plus hero-level leaderboard for one hero.
    pub async fn dota_plus_leaderboard(
        &self,
        hero_id: HeroId,
    ) -> Result<Resolved<DotaPlusLeaderboard>, StratzError> {
        let path = format!("/Hero/{}/dotaPlusLeaderboard", hero_id);
        self.client.http.get(&path, None).await
    }
}
