use fmp_core::Endpoint;
use fmp_types::SymbolListKind;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Index constituents and per-asset-class symbol lists.
#[derive(Debug, Clone, Copy)]
pub struct MarketIndexes<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl MarketIndexes<'_> {
    fmp_endpoint! {
        /// Additions to and removals from the S&P 500.
        method: historical_sp500_constituents(),
        endpoint: Endpoint::v3("historical/sp500_constituent")
    }

    fmp_endpoint! {
        /// Current Nasdaq 100 members.
        method: nasdaq_100_constituents(),
        endpoint: Endpoint::v3("nasdaq_constituent")
    }

    fmp_endpoint! {
        /// Current Dow Jones Industrial Average members.
        method: dow_jones_constituents(),
        endpoint: Endpoint::v3("dowjones_constituent")
    }

    fmp_endpoint! {
        /// Additions to and removals from the Dow Jones Industrial Average.
        method: historical_dow_jones_constituents(),
        endpoint: Endpoint::v3("historical/dowjones_constituent")
    }

    fmp_endpoint! {
        /// Symbols of one asset class or exchange.
        method: symbol_list(kind: SymbolListKind),
        endpoint: Endpoint::v3(&format!("symbol/available-{kind}"))
    }
}
