use serde_json::{Value, json};

const STATEMENTS: &[&str] = &[
    "income-statement",
    "balance-sheet-statement",
    "cash-flow-statement",
];

pub fn is_statement(path: &str) -> bool {
    STATEMENTS.contains(&path)
}

/// Five fiscal years of figures for AAPL, newest first; other symbols have none.
pub fn by_symbol(statement: &str, symbol: &str, limit: Option<usize>) -> Value {
    if symbol != "AAPL" {
        return Value::Array(vec![]);
    }
    let years = [
        (2023, 383_285_i64, 96_995_i64),
        (2022, 394_328, 99_803),
        (2021, 365_817, 94_680),
        (2020, 274_515, 57_411),
        (2019, 260_174, 55_256),
    ];
    let rows = years
        .iter()
        .take(limit.unwrap_or(years.len()))
        .map(|&(year, revenue, net_income)| {
            let mut row = json!({
                "date": format!("{year}-09-30"),
                "symbol": symbol,
                "reportedCurrency": "USD",
                "calendarYear": year.to_string(),
                "period": "FY",
            });
            let figures = match statement {
                "income-statement" => json!({
                    "revenue": revenue * 1_000_000,
                    "netIncome": net_income * 1_000_000,
                }),
                "balance-sheet-statement" => json!({
                    "totalAssets": revenue * 900_000,
                    "totalLiabilities": revenue * 750_000,
                }),
                _ => json!({
                    "operatingCashFlow": net_income * 1_150_000,
                    "freeCashFlow": net_income * 1_000_000,
                }),
            };
            if let (Some(fields), Value::Object(extra)) = (row.as_object_mut(), figures) {
                fields.extend(extra);
            }
            row
        })
        .collect();
    Value::Array(rows)
}
