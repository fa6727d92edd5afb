//! Leagues sub-client.

use crate::client::StratzClient;
use crate::domain::league::{League, LeagueMatchesQuery, LeaguesQuery, Series};
use crate::domain::matches::Match;
use crate::error::StratzError;
use crate::http::{QueryParams, Resolved};
use crate::shared::LeagueId;

pub struct Leagues<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Leagues<'a> {
    /// Leagues limited by `query`.
    pub async fn list(&self, query: &LeaguesQuery) -> Result<Resolved<Vec<League>>, StratzError> {
        let params = QueryParams::from_serialize(query)?;
        self.client.http.get("/League", Some(&params)).await
    }

    pub async fn get(&self, league_id: LeagueId) -> Result<Resolved<League>, StratzError> {
        self.client
            .http
            .get(&format!("/League/{}", league_id), None)
            .await
    }

    /// Matches played in a league.
    pub async fn matches(
        &self,
        league_id: LeagueId,
        query: &LeagueMatchesQuery,
    ) -> Result<Resolved<Vec<Match>>, StratzError> {
        let params = QueryParams::from_serialize(query)?;
        self.client
            .http
            .get(&format!("/League/{}/matches", league_id), Some(&params))
            .await
    }

    pub async fn series(
        &self,
        league_id: LeagueId,
        query: &LeagueMatchesQuery,
    ) -> Result<Resolved<Vec<Series>>, StratzError> {
        let params = QueryParams::from_serialize(query)?;
        self.client
            .http
            .get(&format!("/League/{}/series", league_id), Some(&params))
            .await
    }
}
