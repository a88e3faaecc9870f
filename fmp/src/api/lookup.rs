use fmp_core::Endpoint;
use fmp_types::{ScreenerExchange, SearchExchange, Sector};
use serde::{Deserialize, Serialize};

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Symbol search and the stock screener.
#[derive(Debug, Clone, Copy)]
pub struct StockLookUpTool<'a> {
    pub(crate) fmp: &'a Fmp,
}

/// Filters for [`StockLookUpTool::stock_screener`]. Only the fields that are `Some`
/// are sent.
///
/// `country` is passed through as given; [`StockLookUpTool::available_countries`]
/// lists the values the service recognises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockScreener {
    /// Minimum market capitalisation.
    pub market_cap_more_than: Option<f64>,
    /// Maximum market capitalisation.
    pub market_cap_lower_than: Option<f64>,
    /// Minimum share price.
    pub price_more_than: Option<f64>,
    /// Maximum share price.
    pub price_lower_than: Option<f64>,
    /// Minimum beta.
    pub beta_more_than: Option<f64>,
    /// Maximum beta.
    pub beta_lower_than: Option<f64>,
    /// Minimum traded volume.
    pub volume_more_than: Option<f64>,
    /// Maximum traded volume.
    pub volume_lower_than: Option<f64>,
    /// Minimum dividend.
    pub dividend_more_than: Option<f64>,
    /// Maximum dividend.
    pub dividend_lower_than: Option<f64>,
    /// Restrict to (or exclude) ETFs.
    pub is_etf: Option<bool>,
    /// Restrict to (or exclude) actively trading symbols.
    pub is_actively_trading: Option<bool>,
    /// Sector.
    pub sector: Option<Sector>,
    /// Free-form industry name, e.g. `"Software"`.
    pub industry: Option<String>,
    /// Two-letter country code, e.g. `"US"`.
    pub country: Option<String>,
    /// Listing exchange.
    pub exchange: Option<ScreenerExchange>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl StockScreener {
    pub(crate) fn to_endpoint(&self) -> Endpoint {
        Endpoint::v3("stock-screener")
            .opt_param("marketCapMoreThan", self.market_cap_more_than)
            .opt_param("marketCapLowerThan", self.market_cap_lower_than)
            .opt_param("priceMoreThan", self.price_more_than)
            .opt_param("priceLowerThan", self.price_lower_than)
            .opt_param("betaMoreThan", self.beta_more_than)
            .opt_param("betaLowerThan", self.beta_lower_than)
            .opt_param("volumeMoreThan", self.volume_more_than)
            .opt_param("volumeLowerThan", self.volume_lower_than)
            .opt_param("dividendMoreThan", self.dividend_more_than)
            .opt_param("dividendLowerThan", self.dividend_lower_than)
            .opt_param("isEtf", self.is_etf)
            .opt_param("isActivelyTrading", self.is_actively_trading)
            .opt_param("sector", self.sector)
            .opt_param("industry", self.industry.as_deref())
            .opt_param("country", self.country.as_deref())
            .opt_param("exchange", self.exchange)
            .opt_param("limit", self.limit)
    }
}

impl StockLookUpTool<'_> {
    fmp_endpoint! {
        /// Search symbols and company names.
        method: search(query: &str, exchange: Option<SearchExchange>, limit: Option<u32>),
        endpoint: Endpoint::v3("search")
            .param("query", query)
            .opt_param("exchange", exchange)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Search ticker symbols only.
        method: ticker_search(query: &str, exchange: Option<SearchExchange>, limit: Option<u32>),
        endpoint: Endpoint::v3("search-ticker")
            .param("query", query)
            .opt_param("exchange", exchange)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Screen stocks by fundamentals, sector and listing.
        method: stock_screener(filters: &StockScreener),
        endpoint: filters.to_endpoint()
    }

    fmp_endpoint! {
        /// Countries accepted by the screener's `country` filter.
        method: available_countries(),
        endpoint: Endpoint::v3("get-all-countries")
    }
}
