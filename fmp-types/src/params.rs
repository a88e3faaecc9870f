//! Closed parameter sets accepted by FMP endpoints.
//!
//! Each enum carries its exact wire spelling via `as_str`, and parses back from it
//! with `FromStr` (unknown spellings yield `FmpError::InvalidArg`).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::FmpError;

/// Format used for every date parameter (`from`, `to`, `date`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date the way FMP expects it in query strings and paths.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire spelling used in URLs.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FmpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(FmpError::InvalidArg(format!(
                        "{} must be one of [{}], got {other:?}",
                        $label,
                        [$($wire),+].join(", "),
                    ))),
                }
            }
        }
    };
}

wire_enum! {
    /// Financial statement kind for statement and growth endpoints.
    StatementType, "statement type" {
        /// Income statement.
        IncomeStatement => "income-statement",
        /// Balance sheet.
        BalanceSheet => "balance-sheet-statement",
        /// Cash flow statement.
        CashFlow => "cash-flow-statement",
    }
}

wire_enum! {
    /// Statement kind for the as-reported endpoints, which add a combined report.
    AsReportedStatement, "as-reported statement type" {
        /// Income statement.
        IncomeStatement => "income-statement",
        /// Balance sheet.
        BalanceSheet => "balance-sheet-statement",
        /// Cash flow statement.
        CashFlow => "cash-flow-statement",
        /// All statements in a single document.
        Full => "financial-statement-full",
    }
}

impl From<StatementType> for AsReportedStatement {
    fn from(s: StatementType) -> Self {
        match s {
            StatementType::IncomeStatement => Self::IncomeStatement,
            StatementType::BalanceSheet => Self::BalanceSheet,
            StatementType::CashFlow => Self::CashFlow,
        }
    }
}

wire_enum! {
    /// Reporting cadence.
    Period, "period" {
        /// Fiscal years.
        Annual => "annual",
        /// Fiscal quarters.
        Quarter => "quarter",
    }
}

wire_enum! {
    /// Filing period for 10-K / 10-Q reports.
    ReportPeriod, "report period" {
        /// Full fiscal year (10-K).
        FullYear => "FY",
        /// First quarter.
        Q1 => "Q1",
        /// Second quarter.
        Q2 => "Q2",
        /// Third quarter.
        Q3 => "Q3",
        /// Fourth quarter.
        Q4 => "Q4",
    }
}

wire_enum! {
    /// Intraday bar size for charts and intraday indicators.
    Timeframe, "timeframe" {
        /// One minute.
        OneMinute => "1min",
        /// Five minutes.
        FiveMinutes => "5min",
        /// Fifteen minutes.
        FifteenMinutes => "15min",
        /// Thirty minutes.
        ThirtyMinutes => "30min",
        /// One hour.
        OneHour => "1hour",
        /// Four hours.
        FourHours => "4hour",
    }
}

wire_enum! {
    /// Technical indicator kind.
    IndicatorType, "indicator type" {
        /// Simple moving average.
        Sma => "sma",
        /// Exponential moving average.
        Ema => "ema",
        /// Weighted moving average.
        Wma => "wma",
        /// Double exponential moving average.
        Dema => "dema",
        /// Triple exponential moving average.
        Tema => "tema",
        /// Williams %R.
        Williams => "williams",
        /// Relative strength index.
        Rsi => "rsi",
        /// Average directional index.
        Adx => "adx",
        /// Rolling standard deviation.
        StandardDeviation => "standardDeviation",
    }
}

wire_enum! {
    /// Shape of the daily history series.
    SeriesType, "series type" {
        /// Close price only.
        Line => "line",
        /// Full OHLCV bars.
        Bar => "bar",
    }
}

wire_enum! {
    /// Exchange / asset-class filter for the search endpoints.
    SearchExchange, "search exchange" {
        /// Exchange traded funds.
        Etf => "ETF",
        /// Mutual funds.
        MutualFund => "MUTUAL_FUND",
        /// Commodities.
        Commodity => "COMMODITY",
        /// Indexes.
        Index => "INDEX",
        /// Cryptocurrencies.
        Crypto => "CRYPTO",
        /// Currency pairs.
        Forex => "FOREX",
        /// Toronto Stock Exchange.
        Tsx => "TSX",
        /// NYSE American.
        Amex => "AMEX",
        /// Nasdaq.
        Nasdaq => "NASDAQ",
        /// New York Stock Exchange.
        Nyse => "NYSE",
        /// Euronext.
        Euronext => "EURONEXT",
        /// Xetra.
        Xetra => "XETRA",
        /// National Stock Exchange of India.
        Nse => "NSE",
        /// London Stock Exchange.
        Lse => "LSE",
    }
}

wire_enum! {
    /// Exchange filter for the stock screener.
    ScreenerExchange, "screener exchange" {
        /// New York Stock Exchange.
        Nyse => "nyse",
        /// Nasdaq.
        Nasdaq => "nasdaq",
        /// NYSE American.
        Amex => "amex",
        /// Euronext.
        Euronext => "euronext",
        /// Toronto Stock Exchange.
        Tsx => "tsx",
        /// Exchange traded funds.
        Etf => "etf",
        /// Mutual funds.
        MutualFund => "mutual_fund",
    }
}

wire_enum! {
    /// Sector filter for the stock screener.
    Sector, "sector" {
        /// Consumer Cyclical.
        ConsumerCyclical => "Consumer Cyclical",
        /// Energy.
        Energy => "Energy",
        /// Technology.
        Technology => "Technology",
        /// Industrials.
        Industrials => "Industrials",
        /// Financial Services.
        FinancialServices => "Financial Services",
        /// Basic Materials.
        BasicMaterials => "Basic Materials",
        /// Communication Services.
        CommunicationServices => "Communication Services",
        /// Consumer Defensive.
        ConsumerDefensive => "Consumer Defensive",
        /// Healthcare.
        Healthcare => "Healthcare",
        /// Real Estate.
        RealEstate => "Real Estate",
        /// Utilities.
        Utilities => "Utilities",
        /// Industrial Goods (legacy classification).
        IndustrialGoods => "Industrial Goods",
        /// Financial (legacy classification).
        Financial => "Financial",
        /// Services (legacy classification).
        Services => "Services",
        /// Conglomerates (legacy classification).
        Conglomerates => "Conglomerates",
    }
}

wire_enum! {
    /// Which symbol universe to list.
    SymbolListKind, "symbol list" {
        /// Euronext listings.
        Euronext => "euronext",
        /// Toronto Stock Exchange listings.
        Tsx => "tsx",
        /// Cryptocurrencies.
        Cryptocurrencies => "cryptocurrencies",
        /// Currency pairs.
        ForexCurrencyPairs => "forex-currency-pairs",
        /// Commodities.
        Commodities => "commodities",
        /// Exchange traded funds.
        Etfs => "etfs",
        /// Mutual funds.
        MutualFunds => "mutual-funds",
        /// Indexes.
        Indexes => "indexes",
        /// Stocks.
        Stocks => "stocks",
    }
}
