use serde_json::{Value, json};

pub fn by_symbol(symbol: &str) -> Option<Value> {
    let (name, sector, industry, ceo, cik) = match symbol {
        "AAPL" => ("Apple Inc.", "Technology", "Consumer Electronics", "Timothy D. Cook", "0000320193"),
        "MSFT" => ("Microsoft Corporation", "Technology", "Software Infrastructure", "Satya Nadella", "0000789019"),
        "KO" => ("The Coca-Cola Company", "Consumer Defensive", "Beverages Non-Alcoholic", "James Quincey", "0000021344"),
        _ => return None,
    };
    Some(json!({
        "symbol": symbol,
        "companyName": name,
        "currency": "USD",
        "cik": cik,
        "sector": sector,
        "industry": industry,
        "ceo": ceo,
        "country": "US",
        "isEtf": false,
        "isActivelyTrading": true,
    }))
}

pub fn outlook(symbol: &str) -> Option<Value> {
    let profile = by_symbol(symbol)?;
    Some(json!({
        "profile": profile,
        "metrics": { "dividendYielTTM": 0.5, "volume": 52_000_000 },
        "insideTrades": [],
        "stockNews": [],
    }))
}

pub fn market_hours() -> Value {
    json!({
        "stockExchangeName": "New York Stock Exchange",
        "stockMarketHours": { "openingHour": "09:30 a.m. ET", "closingHour": "04:00 p.m. ET" },
        "isTheStockMarketOpen": false,
        "isTheForexMarketOpen": false,
        "isTheCryptoMarketOpen": true,
    })
}
