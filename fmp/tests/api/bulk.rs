use fmp::SeriesType;

use crate::helpers::{assert_rejected, client, date, last};

#[tokio::test]
async fn batch_quote_joins_tickers_into_one_request() {
    let (fmp, mock) = client();
    let payload = fmp.bulk().batch_quote(&["AAPL", "MSFT", "KO"]).await.unwrap();
    assert_eq!(mock.request_count().await, 1);
    assert_eq!(last(&mock).await.path, "v3/quote/AAPL,MSFT,KO");
    assert_eq!(payload.as_json().and_then(|v| v.as_array()).map(Vec::len), Some(3));
}

#[tokio::test]
async fn batch_history() {
    let (fmp, mock) = client();
    let payload = fmp
        .bulk()
        .batch_historical_daily_prices(&["AAPL", "MSFT"], SeriesType::Bar, Some(date(2024, 5, 1)), None, None)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/historical-price-full/AAPL,MSFT");
    assert_eq!(seen.param_keys(), vec!["serietype", "from"]);
    let docs = payload.as_json().unwrap()["historicalStockList"]
        .as_array()
        .unwrap();
    assert_eq!(docs.len(), 2);
}

#[tokio::test]
async fn empty_lists_and_bad_ranges_are_rejected() {
    let (fmp, mock) = client();
    assert_rejected(fmp.bulk().batch_quote(&[]).await, &mock).await;
    assert_rejected(
        fmp.bulk()
            .batch_historical_daily_prices(&[], SeriesType::Line, None, None, None)
            .await,
        &mock,
    )
    .await;
    assert_rejected(
        fmp.bulk()
            .batch_historical_daily_prices(
                &["AAPL"],
                SeriesType::Line,
                Some(date(2024, 1, 1)),
                None,
                Some(5),
            )
            .await,
        &mock,
    )
    .await;
}
