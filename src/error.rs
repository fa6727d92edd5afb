//! Unified SDK error types.

use serde::Serialize;
use thiserror::Error;

/// Description attached to every 204 response.
pub const NO_CONTENT_DESCRIPTION: &str =
    "The request was successful, but no content matching the request was found.";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum StratzError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A required argument was omitted by the caller. Raised before any I/O.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was supplied but is not usable (e.g. an empty search term).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The server answered 204.
    #[error("No Content")]
    NoContent,

    /// Any status outside 2xx other than 302.
    #[error("HTTPS request failed with status code {status}")]
    Status { status: u16, body: Option<String> },

    /// The connection failed before the full response was received.
    #[error("HTTPS request failed to retrieve a response: {message}")]
    Transport { status: u16, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No token provided.")]
    MissingToken,
}

/// Result type alias for SDK operations.
pub type StratzResult<T> = Result<T, StratzError>;

/// Structured error value, in the shape the STRATZ tooling reports errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub is_error: bool,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HttpError {
    /// Status code associated with this error.
    pub fn status(&self) -> u16 {
        match self {
            HttpError::NoContent => 204,
            HttpError::Status { status, .. } | HttpError::Transport { status, .. } => *status,
            HttpError::Client(_) => 500,
        }
    }
}

impl StratzError {
    /// Status code carried by the error. Client-side failures report 400
    /// (usage) or 401 (missing token); everything else without a status
    /// reports 500.
    pub fn status(&self) -> u16 {
        match self {
            StratzError::Http(e) => e.status(),
            StratzError::Auth(_) => 401,
            StratzError::MissingArgument(_) | StratzError::InvalidArgument(_) => 400,
            StratzError::Serde(_) | StratzError::UnexpectedResponse(_) => 500,
        }
    }

    /// True for caller mistakes detected before any request was sent.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            StratzError::MissingArgument(_) | StratzError::InvalidArgument(_)
        )
    }

    /// True when the connection itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, StratzError::Http(HttpError::Transport { .. }))
    }

    pub fn body(&self) -> ErrorBody {
        let (message, description) = match self {
            StratzError::Http(HttpError::NoContent) => (
                "No Content".to_string(),
                Some(NO_CONTENT_DESCRIPTION.to_string()),
            ),
            StratzError::Http(HttpError::Status { body, .. }) => {
                (self.to_string(), body.clone().filter(|b| !b.is_empty()))
            }
            _ => (self.to_string(), None),
        };

        ErrorBody {
            is_error: true,
            status: self.status(),
            message,
            description,
        }
    }
}
