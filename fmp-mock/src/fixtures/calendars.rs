use serde_json::{Value, json};

pub fn earnings() -> Value {
    json!([
        { "date": "2024-05-02", "symbol": "AAPL", "eps": 1.53, "epsEstimated": 1.5, "time": "amc", "revenue": 90_753_000_000_i64 },
        { "date": "2024-04-25", "symbol": "MSFT", "eps": 2.94, "epsEstimated": 2.82, "time": "amc", "revenue": 61_858_000_000_i64 },
        { "date": "2024-04-30", "symbol": "KO", "eps": 0.74, "epsEstimated": 0.7, "time": "bmo", "revenue": 11_300_000_000_i64 },
    ])
}

pub fn dividends() -> Value {
    json!([
        { "date": "2024-05-10", "symbol": "AAPL", "dividend": 0.25, "recordDate": "2024-05-13", "paymentDate": "2024-05-16" },
        { "date": "2024-05-15", "symbol": "MSFT", "dividend": 0.75, "recordDate": "2024-05-16", "paymentDate": "2024-06-13" },
    ])
}
