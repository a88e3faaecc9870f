use crate::helpers::{client, last};

#[tokio::test]
async fn symbol_universes() {
    let (fmp, mock) = client();
    fmp.stock_list().symbols().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/stock/list");
    fmp.stock_list().tradable_symbols().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/available-traded/list");
    fmp.stock_list().etf_list().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/etf/list");
}
