use fmp_core::Endpoint;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Articles, stock news and press releases.
#[derive(Debug, Clone, Copy)]
pub struct StockNews<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl StockNews<'_> {
    fmp_endpoint! {
        /// Articles written by FMP, paged.
        method: fmp_articles(page: u32, size: u32),
        endpoint: Endpoint::v4("articles")
            .param("page", page)
            .param("size", size)
    }

    fmp_endpoint! {
        /// Latest news, optionally for a comma-separated ticker list.
        method: stock_news(tickers: Option<&str>, limit: Option<u32>),
        endpoint: Endpoint::v3("stock_news")
            .opt_param("tickers", tickers)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Press releases published by the company.
        method: press_releases(ticker: &str, limit: Option<u32>),
        endpoint: Endpoint::v3("press-releases")
            .segment(ticker)
            .opt_param("limit", limit)
    }
}
