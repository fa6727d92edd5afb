//! High-level client — `StratzClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the memoised game version and the
//! accessor methods.

use crate::domain::ability::client::Abilities;
use crate::domain::constants::client::Constants;
use crate::domain::constants::GameVersion;
use crate::domain::hero::client::Heroes;
use crate::domain::item::client::Items;
use crate::domain::league::client::Leagues;
use crate::domain::matches::client::Matches;
use crate::domain::npc::client::Npcs;
use crate::domain::player::client::Players;
use crate::domain::search::client::Search;
use crate::domain::user::client::Users;
use crate::error::{StratzError, StratzResult};
use crate::http::{QueryParams, StratzHttp};
use crate::shared::{GameVersionId, Language};

use async_lock::RwLock;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::ability::client::Abilities as AbilitiesClient;
pub use crate::domain::constants::client::Constants as ConstantsClient;
pub use crate::domain::hero::client::Heroes as HeroesClient;
pub use crate::domain::item::client::Items as ItemsClient;
pub use crate::domain::league::client::Leagues as LeaguesClient;
pub use crate::domain::matches::client::Matches as MatchesClient;
pub use crate::domain::npc::client::Npcs as NpcsClient;
pub use crate::domain::player::client::Players as PlayersClient;
pub use crate::domain::search::client::Search as SearchClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the STRATZ SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.heroes()`, `client.matches()`, etc.
///
/// Clones share the memoised latest game version; a freshly built client
/// starts without one.
#[derive(Debug, Clone)]
pub struct StratzClient {
    pub(crate) http: StratzHttp,
    /// Latest game version id, fetched on first need and kept for the
    /// lifetime of the client.
    pub(crate) latest_version: Arc<RwLock<Option<GameVersionId>>>,
}

impl StratzClient {
    /// Create a client for the public API with the given bearer token.
    pub fn new(token: impl Into<String>) -> StratzResult<Self> {
        Self::builder().token(token).build()
    }

    pub fn builder() -> StratzClientBuilder {
        StratzClientBuilder::default()
    }

    /// The underlying dispatcher, for endpoints the SDK does not bind.
    pub fn http(&self) -> &StratzHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn abilities(&self) -> Abilities<'_> {
        Abilities { client: self }
    }

    pub fn constants(&self) -> Constants<'_> {
        Constants { client: self }
    }

    pub fn heroes(&self) -> Heroes<'_> {
        Heroes { client: self }
    }

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }

    pub fn leagues(&self) -> Leagues<'_> {
        Leagues { client: self }
    }

    pub fn matches(&self) -> Matches<'_> {
        Matches { client: self }
    }

    pub fn npcs(&self) -> Npcs<'_> {
        Npcs { client: self }
    }

    pub fn players(&self) -> Players<'_> {
        Players { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn user(&self) -> Users<'_> {
        Users { client: self }
    }

    // ── Game version resolution ──────────────────────────────────────────

    /// The game version to send with a version-scoped request.
    ///
    /// An explicit id is returned untouched. Otherwise the latest version is
    /// served from the memo, or fetched from `/GameVersion` (first entry) and
    /// memoised. Two concurrent first calls may both fetch; both store the
    /// same id.
    pub async fn effective_game_version(
        &self,
        explicit: Option<GameVersionId>,
    ) -> StratzResult<GameVersionId> {
        if let Some(id) = explicit {
            return Ok(id);
        }

        // Fast path: read lock
        if let Some(id) = *self.latest_version.read().await {
            return Ok(id);
        }

        // Slow path: fetch + write lock
        let versions: Vec<GameVersion> = self
            .http
            .get("/GameVersion", None)
            .await?
            .into_body()
            .unwrap_or_default();
        let latest = versions.first().map(|v| v.id).ok_or_else(|| {
            StratzError::UnexpectedResponse("/GameVersion returned no versions".to_string())
        })?;

        *self.latest_version.write().await = Some(latest);
        tracing::debug!(game_version_id = latest, "Memoised latest game version");

        Ok(latest)
    }

    /// The memoised latest version, if it has been resolved already.
    pub async fn cached_game_version(&self) -> Option<GameVersionId> {
        *self.latest_version.read().await
    }

    /// `languageId` + resolved `gameVersionId`, shared by the constant-data lists.
    pub(crate) async fn localized_query(
        &self,
        language: Option<Language>,
        game_version_id: Option<GameVersionId>,
    ) -> StratzResult<QueryParams> {
        let version = self.effective_game_version(game_version_id).await?;
        Ok(QueryParams::new()
            .with("languageId", language.unwrap_or_default().id())
            .with("gameVersionId", version))
    }

    /// Resolved `gameVersionId` alone.
    pub(crate) async fn versioned_query(
        &self,
        game_version_id: Option<GameVersionId>,
    ) -> StratzResult<QueryParams> {
        let version = self.effective_game_version(game_version_id).await?;
        Ok(QueryParams::new().with("gameVersionId", version))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StratzClientBuilder {
    base_url: String,
    token: String,
}

impl Default for StratzClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            token: String::new(),
        }
    }
}

impl StratzClientBuilder {
    /// Bearer token; get one at <https://stratz.com/api>.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Override the scheme + host the requests go to. `/api/v1` is appended.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Build the client. An empty token is accepted here; requests made with
    /// it fail with [`AuthError::MissingToken`](crate::error::AuthError).
    pub fn build(self) -> Result<StratzClient, StratzError> {
        Ok(StratzClient {
            http: StratzHttp::new(&self.base_url, &self.token)?,
            latest_version: Arc::new(RwLock::new(None)),
        })
    }
}
