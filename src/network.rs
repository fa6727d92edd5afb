//! Network URL constants for the STRATZ API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.stratz.com";

/// Path prefix shared by every REST endpoint.
pub const BASE_PATH: &str = "/api/v1";
