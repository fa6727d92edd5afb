//! Matches sub-client.

use crate::client::StratzClient;
use crate::domain::matches::Match;
use crate::error::StratzError;
use crate::http::Resolved;
use crate::shared::MatchId;

use serde_json::Value;

pub struct Matches<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Matches<'a> {
    pub async fn get(&self, match_id: MatchId) -> Result<Resolved<Match>, StratzError> {
        self.client
            .http
            .get(&format!("/match/{}", match_id), None)
            .await
    }

    /// Match with per-player stats and the replay timeline.
    pub async fn breakdown(&self, match_id: MatchId) -> Result<Resolved<Match>, StratzError> {
        self.client
            .http
            .get(&format!("/match/{}/breakdown", match_id), None)
            .await
    }

    /// Live state of an ongoing match, as sent.
    pub async fn live(&self, match_id: MatchId) -> Result<Resolved<Value>, StratzError> {
        self.client
            .http
            .get(&format!("/match/{}/live", match_id), None)
            .await
    }

    /// Ask STRATZ to download and parse the replay again.
    pub async fn request_reprocess(
        &self,
        match_id: MatchId,
    ) -> Result<Resolved<Value>, StratzError> {
        tracing::debug!(match_id, "Requesting match reprocess");
        self.client
            .http
            .post(&format!("/match/{}/retry", match_id), None)
            .await
    }
}
