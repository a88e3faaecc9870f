use serde_json::{Value, json};

const LISTINGS: &[(&str, &str, &str)] = &[
    ("AAPL", "Apple Inc.", "NASDAQ"),
    ("AAL", "American Airlines Group Inc.", "NASDAQ"),
    ("AA", "Alcoa Corporation", "NYSE"),
    ("MSFT", "Microsoft Corporation", "NASDAQ"),
    ("KO", "The Coca-Cola Company", "NYSE"),
];

/// Case-insensitive prefix match on symbol or name.
pub fn by_query(q: &str, limit: Option<usize>) -> Value {
    let q = q.to_ascii_lowercase();
    let hits = LISTINGS
        .iter()
        .filter(|(symbol, name, _)| {
            symbol.to_ascii_lowercase().starts_with(&q) || name.to_ascii_lowercase().starts_with(&q)
        })
        .take(limit.unwrap_or(usize::MAX))
        .map(|(symbol, name, exchange)| {
            json!({ "symbol": symbol, "name": name, "currency": "USD", "exchangeShortName": exchange })
        })
        .collect();
    Value::Array(hits)
}

pub fn screener(limit: Option<usize>) -> Value {
    let rows = LISTINGS
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(symbol, name, exchange)| {
            json!({
                "symbol": symbol,
                "companyName": name,
                "exchangeShortName": exchange,
                "country": "US",
                "isEtf": false,
                "isActivelyTrading": true,
            })
        })
        .collect();
    Value::Array(rows)
}
