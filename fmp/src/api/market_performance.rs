use chrono::NaiveDate;
use fmp_core::Endpoint;
use fmp_types::format_date;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// Sector and industry valuation, sector performance and daily movers.
#[derive(Debug, Clone, Copy)]
pub struct MarketPerformance<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl MarketPerformance<'_> {
    fmp_endpoint! {
        /// Average P/E per sector, computed daily. `exchange` is e.g. `"NYSE"`.
        method: sectors_pe_ratio(date: Option<NaiveDate>, exchange: Option<&str>),
        endpoint: Endpoint::v4("sector_price_earning_ratio")
            .opt_param("date", date.map(format_date))
            .opt_param("exchange", exchange)
    }

    fmp_endpoint! {
        /// Average P/E per industry, computed daily.
        method: industries_pe_ratio(date: Option<NaiveDate>, exchange: Option<&str>),
        endpoint: Endpoint::v4("industry_price_earning_ratio")
            .opt_param("date", date.map(format_date))
            .opt_param("exchange", exchange)
    }

    fmp_endpoint! {
        /// Current percentage change per sector.
        method: sector_performance(),
        endpoint: Endpoint::v3("stock/sectors-performance")
    }

    fmp_endpoint! {
        /// Daily sector performance history.
        method: historical_sector_performance(limit: Option<u32>),
        endpoint: Endpoint::v3("historical-sectors-performance").opt_param("limit", limit)
    }

    fmp_endpoint! {
        /// Biggest gainers of the day.
        method: gainers(),
        endpoint: Endpoint::v3("gainers")
    }

    fmp_endpoint! {
        /// Biggest losers of the day.
        method: losers(),
        endpoint: Endpoint::v3("losers")
    }

    fmp_endpoint! {
        /// Most actively traded symbols of the day.
        method: actives(),
        endpoint: Endpoint::v3("actives")
    }
}
