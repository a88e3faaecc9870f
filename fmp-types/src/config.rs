//! Configuration for the FMP client.

use serde::{Deserialize, Serialize};

/// Default API root. Versioned paths (`v3/...`, `v4/...`) are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api";

/// Settings applied when building an `Fmp` client.
///
/// The API key is not part of the config; pass it to `Fmp::builder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FmpConfig {
    /// Root URL that endpoint paths are appended to.
    pub base_url: String,
    /// Optional `User-Agent` header for the default HTTP transport.
    pub user_agent: Option<String>,
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        }
    }
}
