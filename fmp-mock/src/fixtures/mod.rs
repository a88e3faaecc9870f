use fmp_core::Url;
use serde_json::{Value, json};

mod calendars;
mod history;
mod profile;
mod quotes;
mod search;
mod statements;

pub fn error_message(msg: &str) -> String {
    json!({ "Error Message": msg }).to_string()
}

fn query<'a>(url: &'a Url, key: &str) -> Option<std::borrow::Cow<'a, str>> {
    url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn limit(url: &Url) -> Option<usize> {
    query(url, "limit").and_then(|v| v.parse().ok())
}

/// Each symbol in a comma list that has a fixture, in request order.
fn per_symbol(list: &str, f: impl Fn(&str) -> Option<Value>) -> Value {
    Value::Array(list.split(',').filter_map(|s| f(s.trim())).collect())
}

pub fn by_path(path: &str, url: &Url) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let body = match segments.as_slice() {
        ["v3", "quote", list] => per_symbol(list, quotes::full),
        ["v3", "quote-short", list] => per_symbol(list, quotes::short),
        ["v3", "profile", list] => per_symbol(list, profile::by_symbol),
        ["v4", "company-outlook"] => query(url, "symbol")
            .and_then(|s| profile::outlook(&s))
            .unwrap_or_else(|| json!({})),
        ["v3", "is-the-market-open"] => profile::market_hours(),
        ["v3", statement, symbol] if statements::is_statement(statement) => {
            statements::by_symbol(statement, symbol, limit(url))
        }
        ["v3", "earning_calendar"] => calendars::earnings(),
        ["v3", "stock_dividend_calendar"] => calendars::dividends(),
        ["v3", "search" | "search-ticker"] => {
            search::by_query(&query(url, "query").unwrap_or_default(), limit(url))
        }
        ["v3", "stock-screener"] => search::screener(limit(url)),
        ["v3", "historical-price-full", list] => history::daily(list),
        ["v3", "gainers"] => quotes::movers(true),
        ["v3", "losers"] => quotes::movers(false),
        _ => Value::Array(vec![]),
    };
    body.to_string()
}
