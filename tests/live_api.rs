//! Integration tests against the public STRATZ API.
//!
//! All tests are `#[ignore]` because they require network access and a
//! token. The token is read from `STRATZ_TOKEN`, either from the environment
//! or from a `.env` file at the crate root.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use stratz::prelude::*;

const STEAM_ID: SteamAccountId = 282424658;
const GAME_VERSION_ID: GameVersionId = 169;
const HERO_ID: HeroId = 14;
const LEAGUE_ID: LeagueId = 4122;
const MATCH_ID: MatchId = 7012302987;
const ITEM_ID: ItemId = 1;
const ABILITY_ID: AbilityId = 9627;
const TEAM_NAME: &str = "alliance";

fn live_client() -> StratzClient {
    dotenvy::dotenv().ok();
    let token = std::env::var("STRATZ_TOKEN").expect("STRATZ_TOKEN must be set");
    StratzClient::new(token).expect("client should build")
}

fn body<T>(resolved: Resolved<T>) -> T {
    resolved.into_body().expect("endpoint answered 302 Found")
}

// ─── Constant data ───────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn game_versions_are_newest_first() {
    let client = live_client();
    let versions = body(client.constants().game_versions().await.unwrap());
    let latest = client.constants().latest_game_version().await.unwrap();
    assert_eq!(versions.first().map(|v| v.id), Some(latest));
}

#[tokio::test]
#[ignore]
async fn reference_tables() {
    let client = live_client();
    let constants = client.constants();
    assert!(!body(constants.regions().await.unwrap()).is_empty());
    constants.languages().await.unwrap();
    constants.clusters().await.unwrap();
    constants.game_modes().await.unwrap();
    constants.lobby_types().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn hero_by_id() {
    let client = live_client();
    let hero = body(
        client
            .heroes()
            .get(Some(HERO_ID), None, Some(GAME_VERSION_ID))
            .await
            .unwrap(),
    )
    .expect("hero should exist");
    assert_eq!(hero.id, HERO_ID);
    assert!(!body(client.heroes().list(None, None).await.unwrap()).is_empty());
}

#[tokio::test]
#[ignore]
async fn ability_by_id() {
    let ability = live_client()
        .abilities()
        .get(Some(ABILITY_ID), Some(Language::English), None)
        .await
        .unwrap();
    assert_eq!(body(ability).map(|a| a.id), Some(ABILITY_ID));
}

#[tokio::test]
#[ignore]
async fn items_and_npcs() {
    let client = live_client();
    let item = body(client.items().get(ITEM_ID, None).await.unwrap());
    assert_eq!(item.id, ITEM_ID);
    assert!(!body(client.items().all(None, None).await.unwrap()).is_empty());
    assert!(!body(client.npcs().all(None).await.unwrap()).is_empty());
}

// ─── Leagues, matches, players ───────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn leagues() {
    let client = live_client();
    let leagues = client
        .leagues()
        .list(&LeaguesQuery::new().with_take(5))
        .await
        .unwrap();
    assert!(body(leagues).len() <= 5);
    let league = body(client.leagues().get(LEAGUE_ID).await.unwrap());
    assert_eq!(league.id, LEAGUE_ID);
}

#[tokio::test]
#[ignore]
async fn match_by_id() {
    let m = body(live_client().matches().get(MATCH_ID).await.unwrap());
    assert_eq!(m.id, MATCH_ID);
    assert_eq!(m.players.len(), 10);
}

#[tokio::test]
#[ignore]
async fn player_endpoints() {
    let client = live_client();
    let players = client.players();
    let player = body(players.get(STEAM_ID).await.unwrap());
    assert_eq!(player.steam_account_id, STEAM_ID);
    players.basic(STEAM_ID).await.unwrap();
    players
        .matches(STEAM_ID, &MatchQuery::new().with_take(5))
        .await
        .unwrap();
    players
        .hero_performance(STEAM_ID, None, &HeroPerformanceQuery::default())
        .await
        .unwrap();
    players
        .summary(STEAM_ID, &PlayerSummaryQuery::default())
        .await
        .unwrap();
}

// ─── Search, user ────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn search() {
    let client = live_client();
    let search = client.search();
    search.query(&SearchQuery::new(MATCH_ID.to_string())).await.unwrap();
    search
        .players(&SearchByPlayerQuery::new(STEAM_ID.to_string()))
        .await
        .unwrap();
    search.leagues(LEAGUE_ID).await.unwrap();
    search.teams(TEAM_NAME).await.unwrap();
    search.matches(MATCH_ID).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn user_steam_account() {
    live_client().user().steam().await.unwrap();
}

#[tokio::test]
async fn missing_token_is_rejected() {
    let client = StratzClient::new("").unwrap();
    let err = client.user().steam().await.unwrap_err();
    assert_eq!(err.status(), 401);
}
