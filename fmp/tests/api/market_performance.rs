use crate::helpers::{client, date, last};

#[tokio::test]
async fn pe_ratios_with_optional_date_and_exchange() {
    let (fmp, mock) = client();
    fmp.market_performance()
        .sectors_pe_ratio(Some(date(2023, 10, 10)), Some("NYSE"))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/sector_price_earning_ratio");
    assert_eq!(seen.param_keys(), vec!["date", "exchange"]);
    assert_eq!(seen.get("date"), Some("2023-10-10"));

    fmp.market_performance()
        .industries_pe_ratio(None, None)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/industry_price_earning_ratio");
    assert!(seen.param_keys().is_empty());
}

#[tokio::test]
async fn sector_performance() {
    let (fmp, mock) = client();
    fmp.market_performance().sector_performance().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/stock/sectors-performance");

    fmp.market_performance()
        .historical_sector_performance(Some(10))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/historical-sectors-performance");
    assert_eq!(seen.get("limit"), Some("10"));
}

#[tokio::test]
async fn movers() {
    let (fmp, mock) = client();
    let gainers = fmp.market_performance().gainers().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/gainers");
    let rows = gainers.as_json().and_then(|v| v.as_array()).unwrap();
    assert!(rows.iter().all(|r| r["changes"].as_f64().unwrap() > 0.0));

    fmp.market_performance().losers().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/losers");
    fmp.market_performance().actives().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/actives");
}
