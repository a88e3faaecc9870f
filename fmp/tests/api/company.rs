use crate::helpers::{client, last};

#[tokio::test]
async fn profile_passes_payload_through() {
    let (fmp, mock) = client();
    let payload = fmp.company().profile("AAPL").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/profile/AAPL");
    let row = &payload.as_json().unwrap()[0];
    assert_eq!(row["companyName"], "Apple Inc.");
    assert_eq!(row["cik"], "0000320193");
}

#[tokio::test]
async fn ticker_paths() {
    let (fmp, mock) = client();
    let c = fmp.company();
    c.key_executives("AAPL").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/key-executives/AAPL");
    c.market_capitalization("AAPL").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/market-capitalization/AAPL");
    c.historical_market_capitalization("AAPL", None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/historical-market-capitalization/AAPL");
    assert!(seen.param_keys().is_empty());
    c.historical_market_capitalization("AAPL", Some(100)).await.unwrap();
    assert_eq!(last(&mock).await.get("limit"), Some("100"));
}

#[tokio::test]
async fn v4_symbol_query_endpoints() {
    let (fmp, mock) = client();
    let outlook = fmp.company().company_outlook("AAPL").await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/company-outlook");
    assert_eq!(seen.keys(), vec!["symbol", "apikey"]);
    assert_eq!(outlook.as_json().unwrap()["profile"]["symbol"], "AAPL");

    fmp.company().stock_peers("AAPL").await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/stock_peers");
    assert_eq!(seen.get("symbol"), Some("AAPL"));
}

#[tokio::test]
async fn market_wide_endpoints() {
    let (fmp, mock) = client();
    let hours = fmp.company().market_hours().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/is-the-market-open");
    assert!(hours.as_json().unwrap()["isTheStockMarketOpen"].is_boolean());

    fmp.company().delisted_companies(Some(0)).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/delisted-companies");
    assert_eq!(seen.get("limit"), Some("0"));
}
