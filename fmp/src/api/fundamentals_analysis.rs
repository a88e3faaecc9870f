use fmp_core::Endpoint;
use fmp_types::{FmpError, Period, StatementType};

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Ratios, key metrics, growth figures, ratings and DCF valuations.
#[derive(Debug, Clone, Copy)]
pub struct StockFundamentalsAnalysis<'a> {
    pub(crate) fmp: &'a Fmp,
}

fn key_metrics_endpoint(
    ticker: &str,
    period: Option<Period>,
    limit: Option<u32>,
) -> Result<Endpoint, FmpError> {
    match period {
        Some(period) => Ok(Endpoint::v3("key-metrics")
            .segment(ticker)
            .param("period", period)
            .opt_param("limit", limit)),
        None => {
            let limit = limit.ok_or_else(|| {
                FmpError::invalid_arg("trailing twelve month key metrics require `limit`")
            })?;
            Ok(Endpoint::v3("key-metrics-ttm")
                .segment(ticker)
                .param("limit", limit))
        }
    }
}

fn historical_dcf_endpoint(
    ticker: &str,
    period: Option<Period>,
    limit: Option<u32>,
) -> Result<Endpoint, FmpError> {
    match (period, limit) {
        (Some(_), Some(_)) => Err(FmpError::invalid_arg(
            "historical DCF takes either `period` or `limit`, not both",
        )),
        (Some(period), None) => Ok(Endpoint::v3("historical-discounted-cash-flow-statement")
            .segment(ticker)
            .param("period", period)),
        (None, limit) => Ok(Endpoint::v3("historical-daily-discounted-cash-flow")
            .segment(ticker)
            .opt_param("limit", limit)),
    }
}

impl StockFundamentalsAnalysis<'_> {
    fmp_endpoint! {
        /// Financial ratios per period, or trailing twelve months when `period` is `None`.
        ///
        /// `limit` only applies to the periodic variant.
        method: financial_ratios(ticker: &str, period: Option<Period>, limit: Option<u32>),
        endpoint: match period {
            Some(period) => Endpoint::v3("ratios")
                .segment(ticker)
                .param("period", period)
                .opt_param("limit", limit),
            None => Endpoint::v3("ratios-ttm").segment(ticker),
        }
    }

    fmp_endpoint! {
        /// Enterprise value components per period.
        method: enterprise_values(ticker: &str, period: Period, limit: Option<u32>),
        endpoint: Endpoint::v3("enterprise-values")
            .segment(ticker)
            .param("period", period)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Period-over-period growth of one statement's line items (annual only).
        method: financial_statement_growth(ticker: &str, statement: StatementType, limit: Option<u32>),
        endpoint: Endpoint::v3(&format!("{statement}-growth"))
            .segment(ticker)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Key metrics per period, or trailing twelve months when `period` is `None`.
        ///
        /// The trailing variant requires `limit`.
        method: key_metrics(ticker: &str, period: Option<Period>, limit: Option<u32>),
        try_endpoint: key_metrics_endpoint(ticker, period, limit)
    }

    fmp_endpoint! {
        /// Growth of headline financial figures.
        method: financial_growth(ticker: &str, period: Period, limit: Option<u32>),
        endpoint: Endpoint::v3("financial-growth")
            .segment(ticker)
            .param("period", period)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Current FMP rating and recommendation.
        method: rating(ticker: &str),
        endpoint: Endpoint::v3("rating").segment(ticker)
    }

    fmp_endpoint! {
        /// Daily history of the FMP rating.
        method: historical_rating(ticker: &str, limit: u32),
        endpoint: Endpoint::v3("historical-rating")
            .segment(ticker)
            .param("limit", limit)
    }

    fmp_endpoint! {
        /// Current discounted cash flow valuation.
        method: discounted_cash_flow(ticker: &str),
        endpoint: Endpoint::v3("discounted-cash-flow").segment(ticker)
    }

    fmp_endpoint! {
        /// Historical DCF valuations: per period when `period` is set, otherwise daily.
        ///
        /// `period` and `limit` are mutually exclusive.
        method: historical_discounted_cash_flow(ticker: &str, period: Option<Period>, limit: Option<u32>),
        try_endpoint: historical_dcf_endpoint(ticker, period, limit)
    }
}
