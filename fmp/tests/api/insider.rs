use fmp::InsiderFilter;

use crate::helpers::{client, last};

#[tokio::test]
async fn insider_trading_filters() {
    let (fmp, mock) = client();
    fmp.insider().insider_trading(None, None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/insider-trading");
    assert_eq!(seen.keys(), vec!["apikey"]);

    fmp.insider()
        .insider_trading(Some(InsiderFilter::ReportingCik("0001214128")), Some(20))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.param_keys(), vec!["reportingCik", "limit"]);
    assert_eq!(seen.get("reportingCik"), Some("0001214128"));

    fmp.insider()
        .insider_trading(Some(InsiderFilter::Symbol("AAPL")), None)
        .await
        .unwrap();
    assert_eq!(last(&mock).await.param_keys(), vec!["symbol"]);

    fmp.insider()
        .insider_trading(Some(InsiderFilter::CompanyCik("0000320193")), None)
        .await
        .unwrap();
    assert_eq!(last(&mock).await.param_keys(), vec!["companyCik"]);
}

#[tokio::test]
async fn mapper_feed_and_ftd() {
    let (fmp, mock) = client();
    fmp.insider().cik_mapper(Some("zuckerberg")).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/mapper-cik-name");
    assert_eq!(seen.get("name"), Some("zuckerberg"));

    fmp.insider().cik_mapper(None).await.unwrap();
    assert!(last(&mock).await.param_keys().is_empty());

    fmp.insider().insider_trading_rss_feed(Some(50)).await.unwrap();
    assert_eq!(last(&mock).await.path, "v4/insider-trading-rss-feed");

    fmp.insider().fail_to_deliver("GE").await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/fail_to_deliver");
    assert_eq!(seen.get("symbol"), Some("GE"));
}
