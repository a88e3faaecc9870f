use fmp::{ScreenerExchange, SearchExchange, Sector, StockScreener};

use crate::helpers::{client, last};

#[tokio::test]
async fn search_with_and_without_filters() {
    let (fmp, mock) = client();
    let payload = fmp.lookup().search("AA", None, None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/search");
    assert_eq!(seen.keys(), vec!["query", "apikey"]);
    assert!(!payload.as_json().and_then(|v| v.as_array()).unwrap().is_empty());

    fmp.lookup()
        .ticker_search("AA", Some(SearchExchange::Nasdaq), Some(10))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/search-ticker");
    assert_eq!(seen.param_keys(), vec!["query", "exchange", "limit"]);
    assert_eq!(seen.get("exchange"), Some("NASDAQ"));
}

#[tokio::test]
async fn screener_sends_only_set_filters() {
    let (fmp, mock) = client();
    let filters = StockScreener {
        market_cap_more_than: Some(1_000_000_000.0),
        beta_lower_than: Some(1.5),
        is_actively_trading: Some(true),
        sector: Some(Sector::ConsumerCyclical),
        industry: Some("Auto Manufacturers".to_string()),
        country: Some("US".to_string()),
        exchange: Some(ScreenerExchange::Nasdaq),
        limit: Some(3),
        ..Default::default()
    };
    let payload = fmp.lookup().stock_screener(&filters).await.unwrap();

    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/stock-screener");
    assert_eq!(
        seen.param_keys(),
        vec![
            "marketCapMoreThan",
            "betaLowerThan",
            "isActivelyTrading",
            "sector",
            "industry",
            "country",
            "exchange",
            "limit",
        ]
    );
    assert_eq!(seen.get("marketCapMoreThan"), Some("1000000000"));
    assert_eq!(seen.get("isActivelyTrading"), Some("true"));
    assert_eq!(seen.get("sector"), Some("Consumer Cyclical"));
    assert_eq!(seen.get("exchange"), Some("nasdaq"));
    assert_eq!(payload.as_json().and_then(|v| v.as_array()).map(Vec::len), Some(3));
}

#[tokio::test]
async fn empty_screener_has_no_filters() {
    let (fmp, mock) = client();
    fmp.lookup()
        .stock_screener(&StockScreener::default())
        .await
        .unwrap();
    assert!(last(&mock).await.param_keys().is_empty());
}

#[test]
fn screener_filters_deserialize_partially() {
    let filters: StockScreener =
        serde_json::from_str(r#"{"sector":"Technology","limit":10}"#).unwrap();
    assert_eq!(filters.sector, Some(Sector::Technology));
    assert_eq!(filters.limit, Some(10));
    assert_eq!(filters.country, None);
}

#[tokio::test]
async fn available_countries() {
    let (fmp, mock) = client();
    fmp.lookup().available_countries().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/get-all-countries");
}
