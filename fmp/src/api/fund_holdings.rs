use chrono::NaiveDate;
use fmp_core::Endpoint;
use fmp_types::format_date;

use crate::Fmp;
use crate::api::macros::fmp_endpoint;

/// ETF and fund holdings, institutional holders and 13F filings.
#[derive(Debug, Clone, Copy)]
pub struct FundHoldings<'a> {
    pub(crate) fmp: &'a Fmp,
}

impl FundHoldings<'_> {
    fmp_endpoint! {
        /// Constituents held by an ETF.
        method: etf_holders(ticker: &str),
        endpoint: Endpoint::v3("etf-holder").segment(ticker)
    }

    fmp_endpoint! {
        /// Institutions holding a stock.
        method: institutional_holders(ticker: &str),
        endpoint: Endpoint::v3("institutional-holder").segment(ticker)
    }

    fmp_endpoint! {
        /// Mutual funds holding a stock.
        method: mutual_fund_holders(ticker: &str),
        endpoint: Endpoint::v3("mutual-fund-holder").segment(ticker)
    }

    fmp_endpoint! {
        /// Sector allocation of an ETF.
        method: etf_sector_weightings(ticker: &str),
        endpoint: Endpoint::v3("etf-sector-weightings").segment(ticker)
    }

    fmp_endpoint! {
        /// Country allocation of an ETF.
        method: etf_country_weightings(ticker: &str),
        endpoint: Endpoint::v3("etf-country-weightings").segment(ticker)
    }

    fmp_endpoint! {
        /// Every CIK that files form 13F.
        method: form_13f_list(),
        endpoint: Endpoint::v3("cik_list")
    }

    fmp_endpoint! {
        /// Find CIKs by (partial) company name.
        method: cik_by_company_name(name: &str),
        endpoint: Endpoint::v3("cik-search").segment(name)
    }

    fmp_endpoint! {
        /// Company name registered under a CIK.
        method: company_name_by_cik(cik: &str),
        endpoint: Endpoint::v3("cik").segment(cik)
    }

    fmp_endpoint! {
        /// Form 13F holdings filed by `cik` for the quarter ending on `date`.
        method: form_13f(cik: &str, date: NaiveDate),
        endpoint: Endpoint::v3("form-thirteen")
            .segment(cik)
            .param("date", format_date(date))
    }

    fmp_endpoint! {
        /// Dates for which [`form_13f`](Self::form_13f) has filings.
        method: form_13f_filing_dates(cik: &str),
        endpoint: Endpoint::v3("form-thirteen-date").segment(cik)
    }

    fmp_endpoint! {
        /// Resolve a CUSIP to its company.
        method: cusip(cusip: &str),
        endpoint: Endpoint::v3("cusip").segment(cusip)
    }
}
