//! API key handling.

use std::fmt;

/// Query parameter name that carries the credential on every request.
pub const API_KEY_PARAM: &str = "apikey";

/// Opaque FMP API key.
///
/// Immutable once constructed. `Debug` output is redacted so keys never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key. Emptiness is not checked here; the remote service rejects bad keys.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for placing into a request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Self(s)
    }
}
