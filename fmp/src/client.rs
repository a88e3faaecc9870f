use std::fmt;
use std::sync::Arc;

use fmp_core::{Credential, Endpoint, Payload, Transport, Url};
use fmp_types::{FmpConfig, FmpError};

use crate::api::{
    AdvancedData, BulkAndBatch, CompanyInformation, FundHoldings, InsiderTrading, MarketIndexes,
    MarketPerformance, Prices, StockCalendars, StockFundamentals, StockFundamentalsAnalysis,
    StockList, StockLookUpTool, StockNews, StockStatistics,
};
use crate::transport::HttpTransport;

/// Request dispatcher for the FMP API.
///
/// Holds only immutable state, so one instance can be shared across tasks and used
/// for concurrent calls without locking.
#[derive(Clone)]
pub struct Fmp {
    credential: Credential,
    base: Url,
    transport: Arc<dyn Transport>,
}

/// Builder for [`Fmp`] with a custom base URL, user agent or transport.
pub struct FmpBuilder {
    credential: Credential,
    cfg: FmpConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl FmpBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new(api_key: impl Into<Credential>) -> Self {
        Self {
            credential: api_key.into(),
            cfg: FmpConfig::default(),
            transport: None,
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: FmpConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Point the client at another API root (a proxy, or a local test server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.cfg.base_url = base_url.into();
        self
    }

    /// `User-Agent` header sent by the default HTTP transport.
    ///
    /// Ignored when a custom transport is supplied.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.cfg.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of the reqwest-backed default.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// - `InvalidArg` when the base URL does not parse or cannot hold path segments.
    /// - `Transport` when the default HTTP client cannot be initialised.
    pub fn build(self) -> Result<Fmp, FmpError> {
        let base = Url::parse(&self.cfg.base_url).map_err(|e| {
            FmpError::invalid_arg(format!("invalid base url {:?}: {e}", self.cfg.base_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(FmpError::invalid_arg(format!(
                "base url cannot carry a path: {base}"
            )));
        }
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(self.cfg.user_agent.as_deref())?),
        };
        Ok(Fmp {
            credential: self.credential,
            base,
            transport,
        })
    }
}

impl Fmp {
    /// Client with the default base URL and HTTP transport.
    ///
    /// # Errors
    /// Returns `Transport` if the HTTP client cannot be initialised.
    pub fn new(api_key: impl Into<Credential>) -> Result<Self, FmpError> {
        FmpBuilder::new(api_key).build()
    }

    /// Start building a customised client.
    #[must_use]
    pub fn builder(api_key: impl Into<Credential>) -> FmpBuilder {
        FmpBuilder::new(api_key)
    }

    /// API root every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Name of the transport in use.
    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// The exact URL [`Fmp::send`] would request for `endpoint`, credential included.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL cannot hold path segments.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, FmpError> {
        endpoint.to_url(&self.base, &self.credential)
    }

    /// Request a raw target: a fragment relative to the API root, such as
    /// `v3/quote/AAPL` or `v3/search?query=AA&limit=5`, or a fully qualified URL
    /// below it.
    ///
    /// An `apikey` pair inside the target is replaced by the client's own key.
    ///
    /// # Errors
    /// `InvalidArg` for an empty or malformed target, or a URL outside the API root;
    /// otherwise as [`Fmp::send`].
    pub async fn request(&self, target: &str) -> Result<Payload, FmpError> {
        let endpoint = Endpoint::resolve(target, &self.base)?;
        self.send(endpoint).await
    }

    /// Perform one GET for `endpoint` and decode the body.
    ///
    /// # Errors
    /// - `Transport` when no response was obtained.
    /// - `Status` for a non-2xx status, with the body unchanged.
    /// - `Decode` when a JSON response does not parse.
    pub async fn send(&self, endpoint: Endpoint) -> Result<Payload, FmpError> {
        let url = self.url_for(&endpoint)?;
        let raw = self.transport.get(&url).await;

        #[cfg(feature = "tracing")]
        match &raw {
            Ok(r) if r.is_success() => tracing::debug!(
                target: "fmp::api",
                path = %endpoint.path(),
                status = r.status,
                transport = self.transport.name(),
                "request completed"
            ),
            Ok(r) => tracing::warn!(
                target: "fmp::api",
                path = %endpoint.path(),
                status = r.status,
                transport = self.transport.name(),
                "non-success status"
            ),
            Err(e) => tracing::warn!(
                target: "fmp::api",
                path = %endpoint.path(),
                error = %e,
                transport = self.transport.name(),
                "transport failure"
            ),
        }

        raw?.into_payload()
    }

    /// Financial statements and filings.
    #[must_use]
    pub const fn fundamentals(&self) -> StockFundamentals<'_> {
        StockFundamentals { fmp: self }
    }

    /// Ratios, metrics, growth, ratings and DCF valuations.
    #[must_use]
    pub const fn fundamentals_analysis(&self) -> StockFundamentalsAnalysis<'_> {
        StockFundamentalsAnalysis { fmp: self }
    }

    /// Earnings, IPO, split, dividend and economic calendars.
    #[must_use]
    pub const fn calendars(&self) -> StockCalendars<'_> {
        StockCalendars { fmp: self }
    }

    /// Symbol search and the stock screener.
    #[must_use]
    pub const fn lookup(&self) -> StockLookUpTool<'_> {
        StockLookUpTool { fmp: self }
    }

    /// Company profiles, executives and market capitalisation.
    #[must_use]
    pub const fn company(&self) -> CompanyInformation<'_> {
        CompanyInformation { fmp: self }
    }

    /// News, articles and press releases.
    #[must_use]
    pub const fn news(&self) -> StockNews<'_> {
        StockNews { fmp: self }
    }

    /// Sector and industry performance, gainers and losers.
    #[must_use]
    pub const fn market_performance(&self) -> MarketPerformance<'_> {
        MarketPerformance { fmp: self }
    }

    /// SIC classification and commitments of traders reports.
    #[must_use]
    pub const fn advanced(&self) -> AdvancedData<'_> {
        AdvancedData { fmp: self }
    }

    /// Sentiment, grades, surprises and estimates.
    #[must_use]
    pub const fn statistics(&self) -> StockStatistics<'_> {
        StockStatistics { fmp: self }
    }

    /// Insider transactions and CIK mapping.
    #[must_use]
    pub const fn insider(&self) -> InsiderTrading<'_> {
        InsiderTrading { fmp: self }
    }

    /// Quotes, charts, corporate actions and technical indicators.
    #[must_use]
    pub const fn prices(&self) -> Prices<'_> {
        Prices { fmp: self }
    }

    /// ETF, mutual fund and institutional holdings, 13F filings.
    #[must_use]
    pub const fn fund_holdings(&self) -> FundHoldings<'_> {
        FundHoldings { fmp: self }
    }

    /// Symbol universes.
    #[must_use]
    pub const fn stock_list(&self) -> StockList<'_> {
        StockList { fmp: self }
    }

    /// Multi-ticker requests.
    #[must_use]
    pub const fn bulk(&self) -> BulkAndBatch<'_> {
        BulkAndBatch { fmp: self }
    }

    /// Index constituents and symbol lists.
    #[must_use]
    pub const fn market_indexes(&self) -> MarketIndexes<'_> {
        MarketIndexes { fmp: self }
    }
}

impl fmt::Debug for Fmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fmp")
            .field("credential", &self.credential)
            .field("base", &self.base.as_str())
            .field("transport", &self.transport.name())
            .finish()
    }
}
