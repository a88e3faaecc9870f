use fmp_core::Endpoint;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Insider transactions from SEC forms 3, 4 and 5.
#[derive(Debug, Clone, Copy)]
pub struct InsiderTrading<'a> {
    pub(crate) fmp: &'a Fmp,
}

/// The one key an insider trading query may be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsiderFilter<'a> {
    /// Traded company ticker.
    Symbol(&'a str),
    /// CIK of the traded company.
    CompanyCik(&'a str),
    /// CIK of the reporting insider.
    ReportingCik(&'a str),
}

impl<'a> InsiderFilter<'a> {
    const fn pair(self) -> (&'static str, &'a str) {
        match self {
            Self::Symbol(v) => ("symbol", v),
            Self::CompanyCik(v) => ("companyCik", v),
            Self::ReportingCik(v) => ("reportingCik", v),
        }
    }
}

impl InsiderTrading<'_> {
    fmp_endpoint! {
        /// Latest insider transactions, optionally filtered.
        method: insider_trading(filter: Option<InsiderFilter<'_>>, limit: Option<u32>),
        endpoint: match filter.map(InsiderFilter::pair) {
            Some((key, value)) => Endpoint::v4("insider-trading").param(key, value),
            None => Endpoint::v4("insider-trading"),
        }
        .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Map reporting insiders' names to CIKs, optionally searching by name.
        method: cik_mapper(name: Option<&str>),
        endpoint: Endpoint::v4("mapper-cik-name").opt_param("name", name)
    }

    fmp_endpoint! {
        /// Real-time feed of insider filings.
        method: insider_trading_rss_feed(limit: Option<u32>),
        endpoint: Endpoint::v4("insider-trading-rss-feed").opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Fail-to-deliver records for a ticker.
        method: fail_to_deliver(ticker: &str),
        endpoint: Endpoint::v4("fail_to_deliver").param("symbol", ticker)
    }
}
