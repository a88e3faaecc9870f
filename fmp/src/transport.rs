use async_trait::async_trait;
use fmp_core::{RawResponse, Transport, Url};
use fmp_types::FmpError;
use reqwest::header::CONTENT_TYPE;

/// reqwest-backed transport used by default.
///
/// No timeout is configured beyond reqwest's own defaults, and nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport, optionally sending a custom `User-Agent`.
    ///
    /// # Errors
    /// Returns `Transport` if the underlying client cannot be constructed.
    pub fn new(user_agent: Option<&str>) -> Result<Self, FmpError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }
        let client = builder
            .build()
            .map_err(|e| FmpError::Transport(format!("http client init: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    // reqwest errors embed the request URL, which carries the key.
    async fn get(&self, url: &Url) -> Result<RawResponse, FmpError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FmpError::Transport(e.without_url().to_string()))?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp
            .text()
            .await
            .map_err(|e| FmpError::Transport(e.without_url().to_string()))?;
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
