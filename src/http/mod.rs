//! HTTP client layer — `StratzHttp` dispatcher and query serialization.

pub mod client;
pub mod query;

pub use client::{Found, Resolved, StratzHttp};
pub use query::{QueryParams, QueryValue};
pub use reqwest::Method;
