use serde_json::{Value, json};

struct Row {
    symbol: &'static str,
    name: &'static str,
    price: f64,
    previous_close: f64,
    exchange: &'static str,
    volume: u64,
}

#[rustfmt::skip]
const ROWS: &[Row] = &[
    Row { symbol: "AAPL", name: "Apple Inc.", price: 190.0, previous_close: 188.0, exchange: "NASDAQ", volume: 52_000_000 },
    Row { symbol: "MSFT", name: "Microsoft Corporation", price: 420.0, previous_close: 418.0, exchange: "NASDAQ", volume: 21_000_000 },
    Row { symbol: "GOOGL", name: "Alphabet Inc.", price: 150.0, previous_close: 148.0, exchange: "NASDAQ", volume: 25_000_000 },
    Row { symbol: "NVDA", name: "NVIDIA Corporation", price: 1000.0, previous_close: 990.0, exchange: "NASDAQ", volume: 40_000_000 },
    Row { symbol: "KO", name: "The Coca-Cola Company", price: 60.0, previous_close: 59.5, exchange: "NYSE", volume: 12_000_000 },
    Row { symbol: "SPY", name: "SPDR S&P 500 ETF Trust", price: 520.0, previous_close: 521.0, exchange: "AMEX", volume: 70_000_000 },
];

fn find(symbol: &str) -> Option<&'static Row> {
    ROWS.iter().find(|r| r.symbol == symbol)
}

fn change(r: &Row) -> (f64, f64) {
    let change = r.price - r.previous_close;
    (change, change / r.previous_close * 100.0)
}

pub fn full(symbol: &str) -> Option<Value> {
    let r = find(symbol)?;
    let (change, pct) = change(r);
    Some(json!({
        "symbol": r.symbol,
        "name": r.name,
        "price": r.price,
        "changesPercentage": pct,
        "change": change,
        "previousClose": r.previous_close,
        "volume": r.volume,
        "exchange": r.exchange,
        "timestamp": 1_717_000_000,
    }))
}

pub fn short(symbol: &str) -> Option<Value> {
    let r = find(symbol)?;
    Some(json!({ "symbol": r.symbol, "price": r.price, "volume": r.volume }))
}

pub fn movers(gainers: bool) -> Value {
    let rows = ROWS.iter().filter(|r| (r.price > r.previous_close) == gainers);
    Value::Array(
        rows.map(|r| {
            let (change, pct) = change(r);
            json!({
                "ticker": r.symbol,
                "companyName": r.name,
                "price": r.price,
                "changes": change,
                "changesPercentage": pct,
            })
        })
        .collect(),
    )
}
