//! Low-level HTTP client — `StratzHttp`.
//!
//! The single chokepoint for outbound requests. Builds the URL, attaches the
//! bearer token, buffers the body and maps the status code to either a JSON
//! value or a [`StratzError`]. Endpoint bindings live in the domain sub-clients.

use crate::error::{AuthError, HttpError, StratzError, StratzResult};
use crate::http::query::QueryParams;
use crate::network::BASE_PATH;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing;

/// Resolved value of a 302 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Found {
    pub status: u16,
    pub message: String,
}

impl Default for Found {
    fn default() -> Self {
        Self {
            status: 302,
            message: "Found".to_string(),
        }
    }
}

impl Found {
    /// Recognise a dispatcher result that came from a 302.
    pub fn from_value(value: &Value) -> Option<Self> {
        let found: Found = serde_json::from_value(value.clone()).ok()?;
        (found == Found::default()).then_some(found)
    }

    fn into_value(self) -> Value {
        serde_json::json!({ "status": self.status, "message": self.message })
    }
}

/// Outcome of a successful request: the parsed body, or the 302 marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    Body(T),
    Found(Found),
}

impl<T> Resolved<T> {
    pub fn into_body(self) -> Option<T> {
        match self {
            Resolved::Body(body) => Some(body),
            Resolved::Found(_) => None,
        }
    }

    pub fn body(&self) -> Option<&T> {
        match self {
            Resolved::Body(body) => Some(body),
            Resolved::Found(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    /// Transform the body, passing a 302 through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Body(body) => Resolved::Body(f(body)),
            Resolved::Found(found) => Resolved::Found(found),
        }
    }
}

impl Resolved<Value> {
    /// Flatten back to JSON; a 302 becomes `{"status": 302, "message": "Found"}`.
    pub fn into_value(self) -> Value {
        match self {
            Resolved::Body(value) => value,
            Resolved::Found(found) => found.into_value(),
        }
    }

    fn deserialize<T: DeserializeOwned>(self) -> StratzResult<Resolved<T>> {
        match self {
            Resolved::Body(value) => Ok(Resolved::Body(serde_json::from_value(value)?)),
            Resolved::Found(found) => Ok(Resolved::Found(found)),
        }
    }
}

/// Low-level HTTP client for the STRATZ REST API.
#[derive(Clone)]
pub struct StratzHttp {
    base_url: String,
    client: Client,
    /// Bearer token. NEVER exposed publicly.
    token: String,
}

impl std::fmt::Debug for StratzHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StratzHttp")
            .field("base_url", &self.base_url)
            .field("has_token", &self.has_token())
            .finish()
    }
}

impl StratzHttp {
    pub fn new(base_url: &str, token: &str) -> Result<Self, HttpError> {
        // 302 is a meaningful answer for some endpoints, so redirects stay visible.
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(HttpError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Full request URL for an endpoint-relative `path`.
    pub fn url(&self, path: &str, query: Option<&QueryParams>) -> String {
        let mut url = format!("{}{}{}", self.base_url, BASE_PATH, path);
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&q.to_query_string());
        }
        url
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Perform exactly one request and return the parsed JSON body.
    ///
    /// 204 is an error, 302 resolves to `{"status": 302, "message": "Found"}`,
    /// any other 2xx resolves to the parsed body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
    ) -> StratzResult<Value> {
        Ok(self.dispatch(method, path, query).await?.into_value())
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
    ) -> StratzResult<Resolved<Value>> {
        if !self.has_token() {
            return Err(AuthError::MissingToken.into());
        }

        let url = self.url(path, query);
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| StratzError::InvalidArgument("token contains invalid characters".into()))?;

        tracing::debug!(method = %method, url = %url, "Dispatching request");

        let resp = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| HttpError::Transport {
                status: e.status().map(|s| s.as_u16()).unwrap_or(500),
                message: e.to_string(),
            })?;

        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(url = %url, status = status.as_u16(), "Failed to read response body: {}", e);
                return Err(HttpError::Transport {
                    status: status.as_u16(),
                    message: e.to_string(),
                }
                .into());
            }
        };

        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "Request completed");

        evaluate(status, &body)
    }

    /// GET and deserialize the body. A 302 is returned as [`Resolved::Found`]
    /// without touching the body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> StratzResult<Resolved<T>> {
        self.dispatch(Method::GET, path, query).await?.deserialize()
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> StratzResult<Resolved<T>> {
        self.dispatch(Method::POST, path, query).await?.deserialize()
    }
}

/// Map a fully buffered response to its outcome.
fn evaluate(status: StatusCode, body: &[u8]) -> StratzResult<Resolved<Value>> {
    match status.as_u16() {
        204 => Err(HttpError::NoContent.into()),
        302 => Ok(Resolved::Found(Found::default())),
        200..=299 => Ok(Resolved::Body(serde_json::from_slice(body)?)),
        code => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            Err(HttpError::Status {
                status: code,
                body: (!text.is_empty()).then_some(text),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> StratzHttp {
        StratzHttp::new("https://api.stratz.com/", "token").unwrap()
    }

    #[test]
    fn test_url_joins_base_path() {
        assert_eq!(http().url("/Hero", None), "https://api.stratz.com/api/v1/Hero");
    }

    #[test]
    fn test_url_appends_query() {
        let q = QueryParams::new().with("languageId", 0u32).with("tier", vec![1, 2]);
        assert_eq!(
            http().url("/League", Some(&q)),
            "https://api.stratz.com/api/v1/League?languageId=0&tier=1&tier=2"
        );
    }

    #[test]
    fn test_empty_query_adds_no_question_mark() {
        let q = QueryParams::new();
        assert_eq!(http().url("/User", Some(&q)), "https://api.stratz.com/api/v1/User");
    }

    #[test]
    fn test_evaluate_success_parses_json() {
        let v = evaluate(StatusCode::OK, br#"[{"id":169}]"#).unwrap().into_body().unwrap();
        assert_eq!(v[0]["id"], 169);
    }

    #[test]
    fn test_evaluate_no_content_is_error() {
        let err = evaluate(StatusCode::NO_CONTENT, b"").unwrap_err();
        assert!(matches!(err, StratzError::Http(HttpError::NoContent)));
        assert_eq!(err.status(), 204);
    }

    #[test]
    fn test_evaluate_found_resolves() {
        let resolved = evaluate(StatusCode::FOUND, b"").unwrap();
        assert!(resolved.is_found());
        let v = resolved.into_value();
        assert_eq!(v, serde_json::json!({ "status": 302, "message": "Found" }));
        assert_eq!(Found::from_value(&v), Some(Found::default()));
    }

    #[test]
    fn test_found_skips_typed_deserialization() {
        #[derive(Debug, serde::Deserialize)]
        struct Shape {
            id: u64,
        }
        let resolved = evaluate(StatusCode::FOUND, b"").unwrap();
        let typed: Resolved<Shape> = resolved.deserialize().unwrap();
        assert_eq!(typed.body().map(|s| s.id), None);
        assert!(matches!(typed, Resolved::Found(f) if f == Found::default()));
    }

    #[test]
    fn test_resolved_map_keeps_found() {
        let body: Resolved<u32> = Resolved::Body(2);
        assert_eq!(body.map(|n| n * 2), Resolved::Body(4));
        let found: Resolved<u32> = Resolved::Found(Found::default());
        assert!(found.map(|n| n * 2).is_found());
    }

    #[test]
    fn test_evaluate_other_status_keeps_code() {
        let err = evaluate(StatusCode::SERVICE_UNAVAILABLE, b"").unwrap_err();
        match err {
            StratzError::Http(HttpError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert!(body.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_bad_json_is_serde_error() {
        let err = evaluate(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, StratzError::Serde(_)));
    }

    #[test]
    fn test_found_from_other_value_is_none() {
        assert!(Found::from_value(&serde_json::json!({ "id": 1 })).is_none());
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_io() {
        // Port 9 (discard) is never contacted: the token check comes first.
        let http = StratzHttp::new("http://127.0.0.1:9", "").unwrap();
        let err = http.request(Method::GET, "/User", None).await.unwrap_err();
        assert!(matches!(err, StratzError::Auth(AuthError::MissingToken)));
    }
}
