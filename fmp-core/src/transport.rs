//! The seam between the dispatcher and the network.

use std::sync::Arc;

use async_trait::async_trait;
use fmp_types::FmpError;
use url::Url;

use crate::payload::{Payload, is_json_content_type};

/// Undecoded HTTP response as produced by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Body text.
    pub body: String,
}

impl RawResponse {
    /// A response with `application/json` content type.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }

    /// A response with `text/plain` content type.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the content type announces JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(is_json_content_type)
    }

    /// Turn the response into a [`Payload`].
    ///
    /// # Errors
    /// - `Status` for any non-2xx status, carrying the body unchanged.
    /// - `Decode` when a JSON content type carries a body that does not parse.
    pub fn into_payload(self) -> Result<Payload, FmpError> {
        if !self.is_success() {
            return Err(FmpError::status(self.status, self.body));
        }
        if self.is_json() {
            let value = serde_json::from_str(&self.body)?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(self.body))
        }
    }
}

/// Performs a single HTTP GET. Implementations must not retry or reshape the response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Issue a GET for `url` and return the raw response.
    ///
    /// Non-success statuses are returned as `Ok`; only failures to obtain a
    /// response at all are errors.
    async fn get(&self, url: &Url) -> Result<RawResponse, FmpError>;
}

impl dyn Transport {
    /// Build a transport from a closure, for tests and ad-hoc wiring.
    pub fn from_fn<F>(f: F) -> Arc<dyn Transport>
    where
        F: Send + Sync + 'static + Fn(&Url) -> Result<RawResponse, FmpError>,
    {
        struct FnTransport<F>(F);

        #[async_trait]
        impl<F> Transport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(&Url) -> Result<RawResponse, FmpError>,
        {
            fn name(&self) -> &'static str {
                "fn"
            }

            async fn get(&self, url: &Url) -> Result<RawResponse, FmpError> {
                (self.0)(url)
            }
        }

        Arc::new(FnTransport(f))
    }
}
