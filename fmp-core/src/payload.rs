//! Decoded response bodies.

use fmp_types::FmpError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body handed back to callers, exactly as the service produced it.
///
/// JSON responses are parsed into a `serde_json::Value` without any reshaping; anything
/// else is returned as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Body served with a JSON content type.
    Json(Value),
    /// Body served with any other content type (CSV exports, HTML error pages...).
    Text(String),
}

impl Payload {
    /// Borrow the JSON value, if this is a JSON payload.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Take the JSON value, if this is a JSON payload.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Borrow the text body, if this is a text payload.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Opt-in typed view of the payload. The client itself never applies a schema.
    ///
    /// Text payloads are parsed as JSON, which lets callers read endpoints whose
    /// content type is mislabelled.
    ///
    /// # Errors
    /// Returns `Decode` when the body does not match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, FmpError> {
        match self {
            Self::Json(v) => Ok(T::deserialize(v)?),
            Self::Text(s) => Ok(serde_json::from_str(s)?),
        }
    }
}

/// True for `application/json`, `text/json`, and any `+json` structured suffix.
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime == "text/json" || mime.ends_with("+json")
}
