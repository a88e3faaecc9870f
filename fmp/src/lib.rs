//! Async client for the Financial Modeling Prep (FMP) REST API.
//!
//! Overview
//! - [`Fmp`] holds the API key, the base URL and a [`Transport`]. It turns a request
//!   descriptor into a URL, attaches the key as `apikey`, performs one GET and decodes
//!   the body into a [`Payload`].
//! - Endpoints are grouped into topical sub-clients reached through accessor methods
//!   (`fmp.prices()`, `fmp.calendars()`, `fmp.insider()`...). Each method maps to exactly
//!   one REST endpoint and returns the service's response unchanged.
//! - Closed parameter sets are enums, dates are `chrono::NaiveDate` and optional
//!   parameters are `Option<T>`; `None` never reaches the query string.
//!
//! There is no retry, caching, throttling or pagination. Callers that want several
//! requests in flight drive them concurrently from their own code.
//!
//! Examples
//! ```rust,ignore
//! use fmp::{Fmp, Period, StatementType};
//!
//! let fmp = Fmp::new("YOUR_API_KEY")?;
//! let quote = fmp.prices().quote("AAPL").await?;
//! let income = fmp
//!     .fundamentals()
//!     .financial_statement("AAPL", StatementType::IncomeStatement, Period::Annual, Some(5))
//!     .await?;
//! let raw = fmp.request("v3/search?query=AA&limit=5").await?;
//! ```
//!
//! See `demos/examples/` for runnable programs.
#![warn(missing_docs)]

mod api;
mod client;
mod transport;

pub use api::{
    AdvancedData, BulkAndBatch, CompanyInformation, FundHoldings, InsiderFilter, InsiderTrading,
    MarketIndexes, MarketPerformance, Prices, SicLookup, StockCalendars, StockFundamentals,
    StockFundamentalsAnalysis, StockList, StockLookUpTool, StockNews, StockScreener,
    StockStatistics,
};
pub use client::{Fmp, FmpBuilder};
pub use transport::HttpTransport;

pub use fmp_core::{
    API_KEY_PARAM, Credential, Endpoint, Payload, RawResponse, Transport, Url,
    is_json_content_type,
};
pub use fmp_types::{
    AsReportedStatement, DEFAULT_BASE_URL, FmpConfig, FmpError, IndicatorType, Period,
    ReportPeriod, ScreenerExchange, SearchExchange, Sector, SeriesType, StatementType,
    SymbolListKind, Timeframe, format_date,
};
