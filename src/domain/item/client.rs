//! Items sub-client.

use crate::client::StratzClient;
use crate::domain::item::Item;
use crate::error::StratzError;
use crate::http::Resolved;
use crate::shared::{GameVersionId, IdMap, ItemId, Language};

pub struct Items<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Items<'a> {
    /// Every item for a game version, keyed by stringified item id.
    pub async fn all(
        &self,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<IdMap<Item>>, StratzError> {
        let query = self.client.localized_query(language, game_version_id).await?;
        self.client.http.get("/Item", Some(&query)).await
    }

    /// A single item, fetched directly by id.
    pub async fn get(
        &self,
        item_id: ItemId,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<Item>, StratzError> {
        let query = self.client.versioned_query(game_version_id).await?;
        self.client
            .http
            .get(&format!("/Item/{}", item_id), Some(&query))
            .await
    }
}
