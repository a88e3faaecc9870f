use fmp::SicLookup;

use crate::helpers::{assert_rejected, client, date, last};

#[tokio::test]
async fn sic_by_each_key() {
    let (fmp, mock) = client();
    let cases = [
        (SicLookup::Symbol("AAPL"), "symbol", "AAPL"),
        (SicLookup::IndustryTitle("services"), "industryTitle", "services"),
        (SicLookup::Cik("0000320193"), "cik", "0000320193"),
        (SicLookup::SicCode("3571"), "sicCode", "3571"),
    ];
    for (lookup, key, value) in cases {
        fmp.advanced()
            .standard_industrial_classification(lookup)
            .await
            .unwrap();
        let seen = last(&mock).await;
        assert_eq!(seen.path, "v4/standard_industrial_classification");
        assert_eq!(seen.keys(), vec![key, "apikey"]);
        assert_eq!(seen.get(key), Some(value));
    }
}

#[tokio::test]
async fn sic_all_uses_dedicated_paths() {
    let (fmp, mock) = client();
    fmp.advanced()
        .standard_industrial_classification(SicLookup::All)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/standard_industrial_classification/all");
    assert_eq!(seen.keys(), vec!["apikey"]);

    fmp.advanced()
        .standard_industrial_classification_list(SicLookup::All)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/standard_industrial_classification_list");
    assert_eq!(seen.keys(), vec!["apikey"]);

    fmp.advanced()
        .standard_industrial_classification_list(SicLookup::SicCode("3571"))
        .await
        .unwrap();
    assert_eq!(last(&mock).await.get("sicCode"), Some("3571"));
}

#[tokio::test]
async fn cot_by_ticker_or_range() {
    let (fmp, mock) = client();
    fmp.advanced().cot_symbols().await.unwrap();
    assert_eq!(last(&mock).await.path, "v4/commitment_of_traders_report/list");

    fmp.advanced().cot_report(Some("NG"), None, None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/commitment_of_traders_report/NG");
    assert!(seen.param_keys().is_empty());

    fmp.advanced()
        .cot_analysis(None, Some(date(2024, 1, 1)), Some(date(2024, 3, 1)))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/commitment_of_traders_report_analysis");
    assert_eq!(seen.param_keys(), vec!["from", "to"]);
}

#[tokio::test]
async fn cot_rejects_bad_combinations() {
    let (fmp, mock) = client();
    let from = Some(date(2024, 1, 1));
    let to = Some(date(2024, 2, 1));
    let adv = fmp.advanced();
    assert_rejected(adv.cot_report(Some("NG"), from, None).await, &mock).await;
    assert_rejected(adv.cot_report(Some("NG"), None, to).await, &mock).await;
    assert_rejected(adv.cot_report(None, None, to).await, &mock).await;
    assert_rejected(adv.cot_report(None, None, None).await, &mock).await;
    assert_rejected(adv.cot_analysis(None, None, None).await, &mock).await;
}
