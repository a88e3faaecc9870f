//! Per-call request descriptor.

use fmp_types::FmpError;
use url::Url;

use crate::credential::{API_KEY_PARAM, Credential};

/// A single REST call: path segments below the API root plus ordered query pairs.
///
/// The credential is not stored here; it is attached by [`Endpoint::to_url`], always
/// as the final query pair and exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Endpoint under the `v3` API. `path` may hold several static segments
    /// (`"historical-price-full/stock_dividend"`).
    #[must_use]
    pub fn v3(path: &str) -> Self {
        Self::versioned("v3", path)
    }

    /// Endpoint under the `v4` API.
    #[must_use]
    pub fn v4(path: &str) -> Self {
        Self::versioned("v4", path)
    }

    fn versioned(version: &str, path: &str) -> Self {
        let segments = std::iter::once(version)
            .chain(path.split('/').filter(|s| !s.is_empty()))
            .map(str::to_string)
            .collect();
        Self {
            segments,
            query: Vec::new(),
        }
    }

    /// Parse a raw fragment such as `v3/quote/AAPL` or `v3/search?query=AA&limit=5`.
    ///
    /// Path segments and query pairs are percent-decoded here and re-encoded when the
    /// URL is built. Any `apikey` pair in the fragment is dropped; the client's own
    /// credential replaces it.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty path or invalid percent-encoding.
    pub fn from_fragment(fragment: &str) -> Result<Self, FmpError> {
        let fragment = fragment.trim();
        let (path, query) = match fragment.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (fragment, None),
        };
        Self::from_parts(path, query)
    }

    /// Resolve a request target against `base`: either a fragment relative to it, or
    /// a fully qualified URL below it (`https://financialmodelingprep.com/api/v3/...`).
    ///
    /// The base path is stripped from absolute URLs, and from relative fragments that
    /// repeat it (`api/v3/quote/AAPL`). Any `apikey` pair is dropped as in
    /// [`Endpoint::from_fragment`].
    ///
    /// # Errors
    /// Returns `InvalidArg` when an absolute URL lies outside `base` (another scheme,
    /// host, port or path), or for the cases [`Endpoint::from_fragment`] rejects.
    pub fn resolve(target: &str, base: &Url) -> Result<Self, FmpError> {
        let target = target.trim();
        let base_segments: Vec<&str> = base
            .path_segments()
            .map(|segs| segs.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        if let Ok(absolute) = Url::parse(target) {
            let outside = || {
                FmpError::invalid_arg(format!(
                    "url {} is not below the API root {base}",
                    absolute.path()
                ))
            };
            if absolute.origin() != base.origin() {
                return Err(outside());
            }
            let path: Vec<&str> = absolute
                .path_segments()
                .map(|segs| segs.filter(|s| !s.is_empty()).collect())
                .unwrap_or_default();
            if !path.starts_with(&base_segments) {
                return Err(outside());
            }
            return Self::from_parts(&path[base_segments.len()..].join("/"), absolute.query());
        }

        let mut endpoint = Self::from_fragment(target)?;
        let repeated = endpoint.segments.len() > base_segments.len()
            && !base_segments.is_empty()
            && endpoint
                .segments
                .iter()
                .zip(&base_segments)
                .all(|(a, b)| a == b);
        if repeated {
            endpoint.segments.drain(..base_segments.len());
        }
        Ok(endpoint)
    }

    fn from_parts(path: &str, query: Option<&str>) -> Result<Self, FmpError> {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                urlencoding::decode(s)
                    .map(std::borrow::Cow::into_owned)
                    .map_err(|e| FmpError::invalid_arg(format!("bad path segment {s:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if segments.is_empty() {
            return Err(FmpError::invalid_arg(format!(
                "endpoint has no path below the API root: {path:?}"
            )));
        }

        let query = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .filter(|(k, _)| k != API_KEY_PARAM)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { segments, query })
    }

    /// Append one dynamic path segment (ticker, CIK, date...). Reserved characters in
    /// `value` are escaped so it stays a single segment.
    #[must_use]
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    /// Append a required query parameter.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is present.
    #[must_use]
    pub fn opt_param<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Slash-joined, unescaped path (e.g. `v3/quote/AAPL`). Safe to log.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Query pairs in insertion order, without the credential.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Value of the first query pair named `key`.
    #[must_use]
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Build the full request URL below `base`, appending the credential last.
    ///
    /// Any query or fragment already present on `base` is discarded.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` cannot carry path segments (e.g. `mailto:` URLs).
    pub fn to_url(&self, base: &Url, credential: &Credential) -> Result<Url, FmpError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                FmpError::invalid_arg(format!("base url cannot carry a path: {base}"))
            })?;
            path.pop_if_empty();
            path.extend(self.segments.iter());
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &self.query {
                pairs.append_pair(k, v);
            }
            pairs.append_pair(API_KEY_PARAM, credential.expose());
        }
        Ok(url)
    }
}
