use chrono::NaiveDate;
use fmp_core::Endpoint;
use fmp_types::{FmpError, IndicatorType, SeriesType, Timeframe, format_date};

use crate::Fmp;
use crate::api::date_range;
use crate::api::macros::fmp_endpoint;

/// Quotes, charts, corporate actions and technical indicators.
#[derive(Debug, Clone, Copy)]
pub struct Prices<'a> {
    pub(crate) fmp: &'a Fmp,
}

/// `timeseries` (last N days) and an explicit `from` are mutually exclusive.
pub(crate) fn daily_history_endpoint(
    tickers: &str,
    series: SeriesType,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    timeseries: Option<u32>,
) -> Result<Endpoint, FmpError> {
    if timeseries.is_some() && from.is_some() {
        return Err(FmpError::invalid_arg(
            "daily history takes either `timeseries` or `from`, not both",
        ));
    }
    let endpoint = Endpoint::v3("historical-price-full")
        .segment(tickers)
        .param("serietype", series);
    Ok(date_range(endpoint, from, to)?.opt_param("timeseries", timeseries))
}

impl Prices<'_> {
    fmp_endpoint! {
        /// Full real-time quote. `tickers` may be a comma-separated list.
        method: quote(tickers: &str),
        endpoint: Endpoint::v3("quote").segment(tickers)
    }

    fmp_endpoint! {
        /// Last price and volume only.
        method: real_time_price(ticker: &str),
        endpoint: Endpoint::v3("quote-short").segment(ticker)
    }

    fmp_endpoint! {
        /// Quotes for every symbol on an exchange or asset class, e.g. `"nyse"`, `"crypto"`.
        method: price_list(exchange: &str),
        endpoint: Endpoint::v3("quotes").segment(exchange)
    }

    fmp_endpoint! {
        /// Intraday OHLCV bars.
        method: intraday_prices(ticker: &str, timeframe: Timeframe),
        endpoint: Endpoint::v3("historical-chart")
            .segment(timeframe.as_str())
            .segment(ticker)
    }

    fmp_endpoint! {
        /// Daily history for one ticker or a comma-separated list.
        ///
        /// `to` requires `from`; `timeseries` (last N days) excludes `from`.
        method: historical_daily_prices(
            tickers: &str,
            series: SeriesType,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
            timeseries: Option<u32>,
        ),
        try_endpoint: daily_history_endpoint(tickers, series, from, to, timeseries)
    }

    fmp_endpoint! {
        /// Dividend history with record and payment dates.
        method: historical_dividends(ticker: &str),
        endpoint: Endpoint::v3("historical-price-full/stock_dividend").segment(ticker)
    }

    fmp_endpoint! {
        /// Stock split history.
        method: historical_stock_splits(ticker: &str),
        endpoint: Endpoint::v3("historical-price-full/stock_split").segment(ticker)
    }

    fmp_endpoint! {
        /// End-of-day prices for one date, including delisted companies.
        method: survivorship_bias_free_eod(ticker: &str, date: NaiveDate),
        endpoint: Endpoint::v4("historical-price-full")
            .segment(ticker)
            .segment(format_date(date))
    }

    fmp_endpoint! {
        /// Daily technical indicator over `period` bars.
        method: daily_indicator(ticker: &str, period: u32, indicator: IndicatorType),
        endpoint: Endpoint::v3("technical_indicator/daily")
            .segment(ticker)
            .param("period", period)
            .param("type", indicator)
    }

    fmp_endpoint! {
        /// Intraday technical indicator over `period` bars of `timeframe`.
        method: intraday_indicator(ticker: &str, timeframe: Timeframe, period: u32, indicator: IndicatorType),
        endpoint: Endpoint::v3("technical_indicator")
            .segment(timeframe.as_str())
            .segment(ticker)
            .param("period", period)
            .param("type", indicator)
    }
}
