//! Constants sub-client — game versions and reference tables.

use crate::client::StratzClient;
use crate::domain::constants::{GameVersion, Region};
use crate::error::StratzError;
use crate::http::Resolved;
use crate::shared::GameVersionId;

/// Sub-client for reference data that is not version scoped.
pub struct Constants<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Constants<'a> {
    /// Every game version, newest first.
    pub async fn game_versions(&self) -> Result<Resolved<Vec<GameVersion>>, StratzError> {
        self.client.http.get("/GameVersion", None).await
    }

    /// Id of the newest game version (memoised on the client).
    pub async fn latest_game_version(&self) -> Result<GameVersionId, StratzError> {
        self.client.effective_game_version(None).await
    }

    /// Languages STRATZ localises constant data into.
    pub async fn languages(&self) -> Result<Resolved<serde_json::Value>, StratzError> {
        self.client.http.get("/Language", None).await
    }

    /// Server clusters, the geographic breakdown of where games are played.
    pub async fn clusters(&self) -> Result<Resolved<serde_json::Value>, StratzError> {
        self.client.http.get("/Cluster", None).await
    }

    pub async fn game_modes(&self) -> Result<Resolved<serde_json::Value>, StratzError> {
        self.client.http.get("/GameMode", None).await
    }

    pub async fn lobby_types(&self) -> Result<Resolved<serde_json::Value>, StratzError> {
        self.client.http.get("/LobbyType", None).await
    }

    pub async fn regions(&self) -> Result<Resolved<Vec<Region>>, StratzError> {
        self.client.http.get("/Region", None).await
    }

    pub async fn patch_notes(&self) -> Result<Resolved<serde_json::Value>, StratzError> {
        self.client.http.get("/PatchNotes", None).await
    }
}
