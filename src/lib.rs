//! # STRATZ SDK
//!
//! A typed async Rust client for the STRATZ Dota 2 REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Identifiers, the `Language` enum, domain shapes and query objects
//! 2. **HTTP API** — `StratzHttp`, the single request dispatcher
//! 3. **High-Level Client** — `StratzClient` with nested sub-clients and the memoised game version
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stratz::prelude::*;
//!
//! let client = StratzClient::new(std::env::var("STRATZ_TOKEN")?)?;
//!
//! // Every endpoint resolves to `Resolved::Body(..)`, or `Resolved::Found(..)` on a 302.
//! let heroes = client.heroes().list(None, None).await?.into_body();
//! let pudge = client.heroes().get(Some(14), Some(Language::English), None).await?;
//! let recent = client
//!     .players()
//!     .matches(282424658, &MatchQuery::new().with_take(10))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared identifiers, `Language` and `IdMap`.
pub mod shared;

/// Domain modules (vertical slices): response shapes, queries, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Request dispatcher and query-string serialization.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StratzClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared identifiers
    pub use crate::shared::{
        AbilityId, GameVersionId, HeroId, IdMap, ItemId, Language, LeagueId, MatchId,
        SteamAccountId,
    };

    // Domain types — constant data
    pub use crate::domain::ability::{Ability, AbilitySummary};
    pub use crate::domain::constants::{GameVersion, LeaderboardDivision, Region};
    pub use crate::domain::hero::{DotaPlusLeaderboard, Hero, HeroStat, HeroSummary};
    pub use crate::domain::item::Item;
    pub use crate::domain::npc::Npc;

    // Domain types — leagues, matches, players
    pub use crate::domain::league::{League, LeagueMatchesQuery, LeagueOrder, LeaguesQuery, Series};
    pub use crate::domain::matches::{Match, MatchPlayer, PickBan};
    pub use crate::domain::player::{
        HeroPerformance, HeroPerformanceQuery, MatchFilter, MatchQuery, Player, PlayerBasic,
        PlayerSummary, PlayerSummaryQuery, ProPlayer, SteamAccount,
    };

    // Domain types — search, user
    pub use crate::domain::search::{LeaderboardRegion, SearchByPlayerQuery, SearchQuery};
    pub use crate::domain::user::User;

    // Errors
    pub use crate::error::{AuthError, ErrorBody, HttpError, StratzError, StratzResult};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        AbilitiesClient, ConstantsClient, HeroesClient, ItemsClient, LeaguesClient,
        MatchesClient, NpcsClient, PlayersClient, SearchClient, StratzClient,
        StratzClientBuilder, UsersClient,
    };
    pub use crate::http::{Found, QueryParams, Resolved};
}
