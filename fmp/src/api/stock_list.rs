use fmp_core::Endpoint;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Symbol universes.
#[derive(Debug, Clone, Copy)]
pub struct StockList<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl StockList<'_> {
    fmp_endpoint! {
        /// Every symbol FMP covers, with name, price and exchange.
        method: symbols(),
        endpoint: Endpoint::v3("stock/list")
    }

    fmp_endpoint! {
        /// Symbols that are currently tradable.
        method: tradable_symbols(),
        endpoint: Endpoint::v3("available-traded/list")
    }

    fmp_endpoint! {
        /// Every ETF symbol with its name and exchange.
        method: etf_list(),
        endpoint: Endpoint::v3("etf/list")
    }
}
