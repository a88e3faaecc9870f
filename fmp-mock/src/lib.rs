//! Mock transport for CI-safe tests and demos.
//!
//! [`MockTransport`] records every URL it is asked for and answers from static
//! fixtures keyed by API path (`v3/quote/AAPL`). Unknown paths answer `[]`, like the
//! real service does for symbols it has no data for.
//!
//! Conventions:
//! - any path segment or query value equal to `FAIL` yields a 500;
//! - an empty `apikey` yields a 401 with FMP's error document.
#![warn(missing_docs)]

use std::collections::HashMap;

use async_trait::async_trait;
use fmp_core::{API_KEY_PARAM, FmpError, RawResponse, Transport, Url};
use tokio::sync::Mutex;

mod fixtures;

/// Symbol that forces a server error.
pub const FAIL_SYMBOL: &str = "FAIL";

/// Recording transport backed by fixtures.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<Url>>,
    overrides: Mutex<HashMap<String, RawResponse>>,
}

impl MockTransport {
    /// Mock with the built-in fixtures and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` (e.g. `v3/quote/AAPL`) with `response` instead of the fixture.
    #[must_use]
    pub fn with_response(mut self, path: &str, response: RawResponse) -> Self {
        self.overrides
            .get_mut()
            .insert(path.trim_matches('/').to_string(), response);
        self
    }

    /// Same as [`with_response`](Self::with_response), for a mock already shared.
    pub async fn set_response(&self, path: &str, response: RawResponse) {
        self.overrides
            .lock()
            .await
            .insert(path.trim_matches('/').to_string(), response);
    }

    /// Every URL requested so far, oldest first.
    pub async fn requests(&self) -> Vec<Url> {
        self.requests.lock().await.clone()
    }

    /// The most recent URL requested.
    pub async fn last_request(&self) -> Option<Url> {
        self.requests.lock().await.last().cloned()
    }

    /// Number of requests made so far.
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    fn respond(path: &str, url: &Url) -> RawResponse {
        let api_key = url
            .query_pairs()
            .find(|(k, _)| k == API_KEY_PARAM)
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();
        if api_key.is_empty() {
            return RawResponse::json(
                401,
                fixtures::error_message("Invalid API KEY. Please retry or visit our documentation."),
            );
        }

        let forced = path.split('/').any(|s| s == FAIL_SYMBOL)
            || url.query_pairs().any(|(_, v)| v == FAIL_SYMBOL);
        if forced {
            return RawResponse::json(500, fixtures::error_message("forced failure"));
        }

        RawResponse::json(200, fixtures::by_path(path, url))
    }
}

/// The API path below the root: everything from the `v3`/`v4` segment on, decoded.
fn api_path(url: &Url) -> String {
    let segments: Vec<String> = url
        .path_segments()
        .into_iter()
        .flatten()
        .skip_while(|s| *s != "v3" && *s != "v4")
        .map(|s| {
            urlencoding::decode(s).map_or_else(|_| s.to_string(), std::borrow::Cow::into_owned)
        })
        .collect();
    segments.join("/")
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "fmp-mock"
    }

    async fn get(&self, url: &Url) -> Result<RawResponse, FmpError> {
        self.requests.lock().await.push(url.clone());
        let path = api_path(url);
        if let Some(resp) = self.overrides.lock().await.get(&path) {
            return Ok(resp.clone());
        }
        Ok(Self::respond(&path, url))
    }
}
