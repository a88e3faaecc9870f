use chrono::NaiveDate;
use fmp_core::Endpoint;
use fmp_types::{FmpError, SeriesType};

use crate::Fmp;
use crate::api::macros::fmp_endpoint;
use crate::api::prices::daily_history_endpoint;

/// Several tickers in a single request.
///
/// Tickers are comma-joined into one path segment; the service answers with one
/// document covering all of them.
#[derive(Debug, Clone, Copy)]
pub struct BulkAndBatch<'a> {
    pub(crate) fmp: &'a Fmp,
}

fn join_tickers(tickers: &[&str]) -> Result<String, FmpError> {
    if tickers.is_empty() {
        return Err(FmpError::invalid_arg("ticker list must not be empty"));
    }
    Ok(tickers.join(","))
}

impl BulkAndBatch<'_> {
    fmp_endpoint! {
        /// Quotes for every ticker in `tickers`.
        method: batch_quote(tickers: &[&str]),
        try_endpoint: join_tickers(tickers).map(|t| Endpoint::v3("quote").segment(t))
    }

    fmp_endpoint! {
        /// Daily history for every ticker in `tickers`.
        method: batch_historical_daily_prices(
            tickers: &[&str],
            series: SeriesType,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
            timeseries: Option<u32>,
        ),
        try_endpoint: join_tickers(tickers)
            .and_then(|t| daily_history_endpoint(&t, series, from, to, timeseries))
    }
}
