//! Topical sub-clients. Each borrows the dispatcher and maps one method to one endpoint.

mod macros;

mod advanced;
mod bulk;
mod calendars;
mod company;
mod fund_holdings;
mod fundamentals;
mod fundamentals_analysis;
mod insider;
mod lookup;
mod market_indexes;
mod market_performance;
mod news;
mod prices;
mod statistics;
mod stock_list;

pub use advanced::{AdvancedData, SicLookup};
pub use bulk::BulkAndBatch;
pub use calendars::StockCalendars;
pub use company::CompanyInformation;
pub use fund_holdings::FundHoldings;
pub use fundamentals::StockFundamentals;
pub use fundamentals_analysis::StockFundamentalsAnalysis;
pub use insider::{InsiderFilter, InsiderTrading};
pub use lookup::{StockLookUpTool, StockScreener};
pub use market_indexes::MarketIndexes;
pub use market_performance::MarketPerformance;
pub use news::StockNews;
pub use prices::Prices;
pub use statistics::StockStatistics;
pub use stock_list::StockList;

use chrono::NaiveDate;
use fmp_core::Endpoint;
use fmp_types::{FmpError, format_date};

/// Append `from`/`to`, rejecting an upper bound without a lower one.
pub(crate) fn date_range(
    endpoint: Endpoint,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Endpoint, FmpError> {
    if to.is_some() && from.is_none() {
        return Err(FmpError::invalid_arg("`to` requires `from`"));
    }
    Ok(endpoint
        .opt_param("from", from.map(format_date))
        .opt_param("to", to.map(format_date)))
}
