use fmp_core::Endpoint;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Company profiles, executives, capitalisation and market status.
#[derive(Debug, Clone, Copy)]
pub struct CompanyInformation<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl CompanyInformation<'_> {
    fmp_endpoint! {
        /// Company profile. `ticker` may be a comma-separated list.
        method: profile(ticker: &str),
        endpoint: Endpoint::v3("profile").segment(ticker)
    }

    fmp_endpoint! {
        /// Executives and their compensation.
        method: key_executives(ticker: &str),
        endpoint: Endpoint::v3("key-executives").segment(ticker)
    }

    fmp_endpoint! {
        /// Current market capitalisation.
        method: market_capitalization(ticker: &str),
        endpoint: Endpoint::v3("market-capitalization").segment(ticker)
    }

    fmp_endpoint! {
        /// Daily market capitalisation history.
        method: historical_market_capitalization(ticker: &str, limit: Option<u32>),
        endpoint: Endpoint::v3("historical-market-capitalization")
            .segment(ticker)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Profile, metrics, ratios, insider trades and news in one document.
        method: company_outlook(ticker: &str),
        endpoint: Endpoint::v4("company-outlook").param("symbol", ticker)
    }

    fmp_endpoint! {
        /// Companies trading on the same exchange, in the same sector, with similar
        /// capitalisation.
        method: stock_peers(ticker: &str),
        endpoint: Endpoint::v4("stock_peers").param("symbol", ticker)
    }

    fmp_endpoint! {
        /// Whether US markets are open, with trading hours and holidays.
        method: market_hours(),
        endpoint: Endpoint::v3("is-the-market-open")
    }

    fmp_endpoint! {
        /// Companies removed from listing, most recent first.
        method: delisted_companies(limit: Option<u32>),
        endpoint: Endpoint::v3("delisted-companies").opt_param("limit", limit)
    }
}
