use chrono::NaiveDate;
use fmp_core::Endpoint;

use crate::Fmp;
use crate::api::date_range;
use crate::api::macros::fmp_endpoint;

/// Earnings, IPO, split, dividend and economic calendars.
///
/// Every date-ranged method rejects `to` without `from`.
#[derive(Debug, Clone, Copy)]
pub struct StockCalendars<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl StockCalendars<'_> {
    fmp_endpoint! {
        /// Upcoming and recent earnings announcements.
        method: earnings_calendar(from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: date_range(Endpoint::v3("earning_calendar"), from, to)
    }

    fmp_endpoint! {
        /// Past earnings announcements for one company.
        method: historical_earnings_calendar(ticker: &str, limit: u32),
        endpoint: Endpoint::v3("historical/earning_calendar")
            .segment(ticker)
            .param("limit", limit)
    }

    fmp_endpoint! {
        /// Initial public offerings.
        method: ipo_calendar(from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: date_range(Endpoint::v3("ipo_calendar"), from, to)
    }

    fmp_endpoint! {
        /// Stock splits.
        method: stock_split_calendar(from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: date_range(Endpoint::v3("stock_split_calendar"), from, to)
    }

    fmp_endpoint! {
        /// Dividend declarations and payments.
        method: dividend_calendar(from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: date_range(Endpoint::v3("stock_dividend_calendar"), from, to)
    }

    fmp_endpoint! {
        /// Macroeconomic releases.
        method: economic_calendar(from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: date_range(Endpoint::v3("economic_calendar"), from, to)
    }
}
