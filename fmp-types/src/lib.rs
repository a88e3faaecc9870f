//! Shared error, configuration, and parameter types for the FMP client crates.
#![warn(missing_docs)]

mod config;
mod error;
pub mod params;

pub use config::{DEFAULT_BASE_URL, FmpConfig};
pub use error::FmpError;
pub use params::{
    AsReportedStatement, IndicatorType, Period, ReportPeriod, ScreenerExchange, SearchExchange,
    Sector, SeriesType, StatementType, SymbolListKind, Timeframe, format_date,
};
