use fmp::SymbolListKind;

use crate::helpers::{client, last};

#[tokio::test]
async fn constituents() {
    let (fmp, mock) = client();
    let idx = fmp.market_indexes();
    idx.historical_sp500_constituents().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/historical/sp500_constituent");
    idx.nasdaq_100_constituents().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/nasdaq_constituent");
    idx.dow_jones_constituents().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/dowjones_constituent");
    idx.historical_dow_jones_constituents().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/historical/dowjones_constituent");
}

#[tokio::test]
async fn symbol_lists() {
    let (fmp, mock) = client();
    fmp.market_indexes()
        .symbol_list(SymbolListKind::ForexCurrencyPairs)
        .await
        .unwrap();
    assert_eq!(last(&mock).await.path, "v3/symbol/available-forex-currency-pairs");
    fmp.market_indexes()
        .symbol_list(SymbolListKind::Indexes)
        .await
        .unwrap();
    assert_eq!(last(&mock).await.path, "v3/symbol/available-indexes");
}
