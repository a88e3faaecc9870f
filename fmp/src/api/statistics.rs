use fmp_core::Endpoint;
use fmp_types::Period;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Social sentiment, analyst grades, earnings surprises and estimates.
#[derive(Debug, Clone, Copy)]
pub struct StockStatistics<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl StockStatistics<'_> {
    fmp_endpoint! {
        /// Hourly social media sentiment.
        method: social_sentiment(ticker: &str, limit: Option<u32>),
        endpoint: Endpoint::v4("social-sentiment")
            .param("symbol", ticker)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Grades given by analysts and investment firms.
        method: stock_grade(ticker: &str, limit: Option<u32>),
        endpoint: Endpoint::v3("grade")
            .segment(ticker)
            .opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Reported earnings against the consensus estimate, per quarter.
        method: earnings_surprises(ticker: &str),
        endpoint: Endpoint::v3("earnings-surprises").segment(ticker)
    }

    fmp_endpoint! {
        /// Consensus analyst estimates.
        method: analyst_estimates(ticker: &str, period: Period, limit: Option<u32>),
        endpoint: Endpoint::v3("analyst-estimates")
            .segment(ticker)
            .param("period", period)
            .opt_param("limit", limit)
    }
}
