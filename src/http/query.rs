//! Query-string serialization.
//!
//! Every query object in the SDK derives `Serialize`; [`QueryParams::from_serialize`]
//! flattens it into ordered `(name, value)` pairs. `None` fields are dropped and
//! list fields become repeated keys (`tier=1&tier=2`).

use crate::error::StratzError;
use serde::Serialize;
use serde_json::Value;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Scalar(s)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Scalar(s.to_string())
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Scalar(n.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(n: u64) -> Self {
        QueryValue::Scalar(n.to_string())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Scalar(b.to_string())
    }
}

impl<T: ToString> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.push((name.into(), value.into()));
    }

    /// Append a parameter when present; `None` is omitted.
    pub fn push_opt<V: Into<QueryValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(v) = value {
            self.push(name, v);
        }
    }

    /// Chaining variant of [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Flatten a serializable query object.
    ///
    /// The value must serialize to a JSON object whose fields are scalars,
    /// arrays of scalars, or null.
    pub fn from_serialize<T: Serialize + ?Sized>(query: &T) -> Result<Self, StratzError> {
        let value = serde_json::to_value(query)?;
        let object = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(StratzError::InvalidArgument(format!(
                    "query must serialize to an object, got {other}"
                )))
            }
        };

        let mut params = Self::new();
        for (name, value) in object {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let mut list = Vec::with_capacity(items.len());
                    for item in items {
                        if let Some(s) = scalar_to_string(&name, item)? {
                            list.push(s);
                        }
                    }
                    params.push(name, QueryValue::List(list));
                }
                scalar => {
                    if let Some(s) = scalar_to_string(&name, scalar)? {
                        params.push(name, QueryValue::Scalar(s));
                    }
                }
            }
        }
        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Expand into `(name, value)` pairs, repeating the name for each list item.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        for (name, value) in &self.0 {
            match value {
                QueryValue::Scalar(s) => out.push((name.as_str(), s.as_str())),
                QueryValue::List(items) => {
                    out.extend(items.iter().map(|s| (name.as_str(), s.as_str())));
                }
            }
        }
        out
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn scalar_to_string(name: &str, value: Value) -> Result<Option<String>, StratzError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Array(_) | Value::Object(_) => Err(StratzError::InvalidArgument(format!(
            "query field `{name}` must be a scalar or a list of scalars"
        ))),
    }
}
