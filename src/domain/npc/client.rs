//! Npcs sub-client.

use crate::client::StratzClient;
use crate::domain::npc::Npc;
use crate::error::StratzError;
use crate::http::Resolved;
use crate::shared::{GameVersionId, IdMap};

pub struct Npcs<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Npcs<'a> {
    /// Every npc for a game version, keyed by stringified npc id.
    pub async fn all(
        &self,
        game_version_id: Option<GameVersionId>,
    ) -> Result<Resolved<IdMap<Npc>>, StratzError> {
        let query = self.client.versioned_query(game_version_id).await?;
        self.client.http.get("/Npc", Some(&query)).await
    }
}
