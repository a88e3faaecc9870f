use chrono::NaiveDate;
use fmp_core::Endpoint;
use fmp_types::FmpError;

use crate::Fmp;
use crate::api::date_range;
use crate::api::macros::fmp_endpoint;

/// SIC classification and CFTC commitments of traders reports.
#[derive(Debug, Clone, Copy)]
pub struct AdvancedData<'a> {
    pub(crate) fmp: &'a Fmp,
}

/// Key used to look up a Standard Industrial Classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SicLookup<'a> {
    /// Company ticker.
    Symbol(&'a str),
    /// Industry title, e.g. `"services"`.
    IndustryTitle(&'a str),
    /// SEC central index key, e.g. `"0000320193"`.
    Cik(&'a str),
    /// Four digit SIC code, e.g. `"3571"`.
    SicCode(&'a str),
    /// No filter.
    All,
}

impl SicLookup<'_> {
    fn apply(self, endpoint: Endpoint) -> Endpoint {
        match self {
            Self::Symbol(v) => endpoint.param("symbol", v),
            Self::IndustryTitle(v) => endpoint.param("industryTitle", v),
            Self::Cik(v) => endpoint.param("cik", v),
            Self::SicCode(v) => endpoint.param("sicCode", v),
            Self::All => endpoint,
        }
    }
}

/// A ticker addresses one market's history; `from`/`to` select every market in a window.
fn cot_endpoint(
    path: &str,
    ticker: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Endpoint, FmpError> {
    match ticker {
        Some(_) if from.is_some() || to.is_some() => Err(FmpError::invalid_arg(
            "commitments of traders queries take either a ticker or a `from`/`to` range",
        )),
        Some(ticker) => Ok(Endpoint::v4(path).segment(ticker)),
        None if from.is_none() => Err(FmpError::invalid_arg(
            "commitments of traders queries require a ticker or `from`",
        )),
        None => date_range(Endpoint::v4(path), from, to),
    }
}

impl AdvancedData<'_> {
    fmp_endpoint! {
        /// SIC record(s) matching `lookup`; [`SicLookup::All`] returns every company.
        method: standard_industrial_classification(lookup: SicLookup<'_>),
        endpoint: match lookup {
            SicLookup::All => Endpoint::v4("standard_industrial_classification/all"),
            other => other.apply(Endpoint::v4("standard_industrial_classification")),
        }
    }

    fmp_endpoint! {
        /// SIC codes and industry titles; [`SicLookup::All`] lists them all.
        method: standard_industrial_classification_list(lookup: SicLookup<'_>),
        endpoint: lookup.apply(Endpoint::v4("standard_industrial_classification_list"))
    }

    fmp_endpoint! {
        /// Markets covered by the commitments of traders report.
        method: cot_symbols(),
        endpoint: Endpoint::v4("commitment_of_traders_report/list")
    }

    fmp_endpoint! {
        /// Commitments of traders report, by ticker or by date range.
        method: cot_report(ticker: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: cot_endpoint("commitment_of_traders_report", ticker, from, to)
    }

    fmp_endpoint! {
        /// Commitments of traders analysis, by ticker or by date range.
        method: cot_analysis(ticker: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>),
        try_endpoint: cot_endpoint("commitment_of_traders_report_analysis", ticker, from, to)
    }
}
