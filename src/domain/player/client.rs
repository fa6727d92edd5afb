//! Players sub-client.

use crate::client::StratzClient;
use crate::domain::matches::Match;
use crate::domain::player::{
    HeroPerformance, HeroPerformanceQuery, MatchQuery, Player, PlayerBasic, PlayerSummary,
    PlayerSummaryQuery, ProPlayer,
};
use crate::error::StratzError;
use crate::http::{QueryParams, Resolved};
use crate::shared::{HeroId, SteamAccountId};

use serde_json::Value;

pub struct Players<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Players<'a> {
    pub async fn get(
        &self,
        steam_account_id: SteamAccountId,
    ) -> Result<Resolved<Player>, StratzError> {
        self.client
            .http
            .get(&format!("/Player/{}", steam_account_id), None)
            .await
    }

    /// Steam account only, without the STRATZ aggregates.
    pub async fn basic(
        &self,
        steam_account_id: SteamAccountId,
    ) -> Result<Resolved<PlayerBasic>, StratzError> {
        self.client
            .http
            .get(&format!("/Player/{}/basic", steam_account_id), None)
            .await
    }

    pub async fn matches(
        &self,
        steam_account_id: SteamAccountId,
        query: &MatchQuery,
    ) -> Result<Resolved<Vec<Match>>, StratzError> {
        let params = QueryParams::from_serialize(query)?;
        self.client
            .http
            .get(&format!("/Player/{}/matches", steam_account_id), Some(&params))
            .await
    }

    /// Per-hero performance. `None` requests `/Player/{id}/heroPerformance`,
    /// `Some(hero)` requests `/Player/{id}/heroPerformance/{hero}`.
    pub async fn hero_performance(
        &self,
        steam_account_id: SteamAccountId,
        hero_id: Option<HeroId>,
        query: &HeroPerformanceQuery,
    ) -> Result<Resolved<Vec<HeroPerformance>>, StratzError> {
        let path = match hero_id {
            Some(hero) => format!("/Player/{}/heroPerformance/{}", steam_account_id, hero),
            None => format!("/Player/{}/heroPerformance", steam_account_id),
        };
        let params = QueryParams::from_serialize(query)?;
        self.client.http.get(&path, Some(&params)).await
    }

    /// Performance on a single hero.
    pub async fn hero_performance_by_hero_id(
        &self,
        steam_account_id: SteamAccountId,
        hero_id: HeroId,
        query: &HeroPerformanceQuery,
    ) -> Result<Resolved<Vec<HeroPerformance>>, StratzError> {
        self.hero_performance(steam_account_id, Some(hero_id), query)
            .await
    }

    pub async fn summary(
        &self,
        steam_account_id: SteamAccountId,
        query: &PlayerSummaryQuery,
    ) -> Result<Resolved<PlayerSummary>, StratzError> {
        let params = QueryParams::from_serialize(query)?;
        self.client
            .http
            .get(&format!("/Player/{}/summary", steam_account_id), Some(&params))
            .await
    }

    /// Professional players this account has shared a match with.
    pub async fn played_with_pro(
        &self,
        steam_account_id: SteamAccountId,
    ) -> Result<Resolved<Value>, StratzError> {
        self.client
            .http
            .get(&format!("/Player/{}/playedWithPro", steam_account_id), None)
            .await
    }

    pub async fn pro_steam_accounts(&self) -> Result<Resolved<Vec<ProPlayer>>, StratzError> {
        self.client.http.get("/Player/proSteamAccount", None).await
    }
}
