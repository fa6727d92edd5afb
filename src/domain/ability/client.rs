//! Abilities sub-client.

use crate::client::StratzClient;
use crate::domain::ability::{Ability, AbilitySummary};
use crate::error::StratzError;
use crate::http::Resolved;
use crate::shared::{AbilityId, GameVersionId, IdMap, Language};

/// Sub-client for ability data.
pub struct Abilities<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Abilities<'a> {
    /// Every ability for a game version, keyed by stringified ability id.
    pub async fn all(
        &self,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<IdMap<Ability>>, StratzError> {
        let query = self.client.localized_query(language, game_version_id).await?;
        self.client.http.get("/Ability", Some(&query)).await
    }

    /// One ability out of [`all`](Self::all). `Ok(None)` when the id is unknown.
    pub async fn get(
        &self,
        ability_id: Option<AbilityId>,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<Option<Ability>>, StratzError> {
        let id = ability_id.ok_or(StratzError::MissingArgument("ability_id"))?;
        let abilities = self.all(language, game_version_id).await?;
        Ok(abilities.map(|mut map| map.remove(&id.to_string())))
    }

    pub async fn list(
        &self,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<Vec<AbilitySummary>>, StratzError> {
        let abilities = self.all(language, game_version_id).await?;
        Ok(abilities.map(|map| map.values().map(AbilitySummary::from).collect()))
    }
}
