use serde_json::{Value, json};

fn series(symbol: &str, base: f64) -> Value {
    let historical: Vec<Value> = (0..5_u32)
        .map(|i| {
            let close = base - f64::from(i);
            json!({
                "date": format!("2024-05-{:02}", 10 - i),
                "open": close - 0.5,
                "high": close + 1.0,
                "low": close - 1.0,
                "close": close,
                "volume": 10_000_000 + u64::from(i) * 100_000,
            })
        })
        .collect();
    json!({ "symbol": symbol, "historical": historical })
}

fn base_price(symbol: &str) -> Option<f64> {
    match symbol {
        "AAPL" => Some(190.0),
        "MSFT" => Some(420.0),
        "KO" => Some(60.0),
        _ => None,
    }
}

/// One ticker yields a single document; several are wrapped in `historicalStockList`.
pub fn daily(list: &str) -> Value {
    let symbols: Vec<&str> = list.split(',').map(str::trim).collect();
    if let [single] = symbols.as_slice() {
        return base_price(single).map_or_else(|| json!({}), |p| series(single, p));
    }
    let docs: Vec<Value> = symbols
        .iter()
        .filter_map(|s| base_price(s).map(|p| series(s, p)))
        .collect();
    json!({ "historicalStockList": docs })
}
