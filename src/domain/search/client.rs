//! Search sub-client.
//!
//! Results are returned as sent; their shape depends on which entity kinds
//! matched the term.

use crate::client::StratzClient;
use crate::domain::search::{SearchByPlayerQuery, SearchQuery};
use crate::error::StratzError;
use crate::http::{QueryParams, Resolved};

use serde_json::Value;
use std::fmt::Display;

pub struct Search<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Search<'a> {
    /// Search every entity kind at once.
    pub async fn query(&self, query: &SearchQuery) -> Result<Resolved<Value>, StratzError> {
        require_term(&query.query)?;
        let params = QueryParams::from_serialize(query)?;
        self.client.http.get("/search", Some(&params)).await
    }

    pub async fn players(&self, query: &SearchByPlayerQuery) -> Result<Resolved<Value>, StratzError> {
        require_term(&query.query)?;
        let params = QueryParams::from_serialize(query)?;
        self.client.http.get("/search/player", Some(&params)).await
    }

    pub async fn leagues(&self, term: impl Display) -> Result<Resolved<Value>, StratzError> {
        self.by_term("/search/league", term).await
    }

    pub async fn teams(&self, term: impl Display) -> Result<Resolved<Value>, StratzError> {
        self.by_term("/search/team", term).await
    }

    pub async fn matches(&self, term: impl Display) -> Result<Resolved<Value>, StratzError> {
        self.by_term("/search/match", term).await
    }

    async fn by_term(&self, path: &str, term: impl Display) -> Result<Resolved<Value>, StratzError> {
        let term = term.to_string();
        require_term(&term)?;
        let params = QueryParams::new().with("query", term);
        self.client.http.get(path, Some(&params)).await
    }
}

fn require_term(term: &str) -> Result<(), StratzError> {
    if term.trim().is_empty() {
        return Err(StratzError::InvalidArgument(
            "search term must not be empty".to_string(),
        ));
    }
    Ok(())
}
