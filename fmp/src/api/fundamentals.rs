use fmp_core::Endpoint;
use fmp_types::{AsReportedStatement, Period, ReportPeriod, StatementType};

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Financial statements, as-reported filings and 10-K/10-Q documents.
#[derive(Debug, Clone, Copy)]
pub struct StockFundamentals<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl StockFundamentals<'_> {
    fmp_endpoint! {
        /// Symbols that have financial statements available.
        method: financial_statement_list(),
        endpoint: Endpoint::v3("financial-statement-symbol-lists")
    }

    fmp_endpoint! {
        /// Normalised income statement, balance sheet or cash flow statement.
        ///
        /// `limit` caps the number of periods returned and is omitted when `None`.
        method: financial_statement(ticker: &str, statement: StatementType, period: Period, limit: Option<u32>),
        endpoint: Endpoint::v3(statement.as_str())
            .segment(ticker)
            .param("period", period)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Statements exactly as filed with the SEC, including the combined full report.
        method: financial_statement_as_reported(ticker: &str, statement: AsReportedStatement, period: Period, limit: Option<u32>),
        endpoint: Endpoint::v3(&format!("{statement}-as-reported"))
            .segment(ticker)
            .param("period", period)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Years and periods for which [`annual_report`](Self::annual_report) has data.
        method: financial_report_dates(ticker: &str),
        endpoint: Endpoint::v4("financial-reports-dates").param("symbol", ticker)
    }

    fmp_endpoint! {
        /// 10-K (`ReportPeriod::FullYear`) or 10-Q report as JSON.
        method: annual_report(ticker: &str, year: i32, period: ReportPeriod),
        endpoint: Endpoint::v4("financial-reports-json")
            .param("symbol", ticker)
            .param("year", year)
            .param("period", period)
    }

    fmp_endpoint! {
        /// Free float and outstanding shares.
        method: shares_float(ticker: &str),
        endpoint: Endpoint::v4("shares_float").param("symbol", ticker)
    }
}
