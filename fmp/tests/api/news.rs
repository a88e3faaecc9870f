use crate::helpers::{client, last};

#[tokio::test]
async fn articles_require_page_and_size() {
    let (fmp, mock) = client();
    fmp.news().fmp_articles(0, 5).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/articles");
    assert_eq!(seen.keys(), vec!["page", "size", "apikey"]);
    assert_eq!(seen.get("page"), Some("0"));
}

#[tokio::test]
async fn stock_news_optional_filters() {
    let (fmp, mock) = client();
    fmp.news().stock_news(None, None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/stock_news");
    assert_eq!(seen.keys(), vec!["apikey"]);

    fmp.news()
        .stock_news(Some("AAPL,FB,INTC"), Some(16))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.get("tickers"), Some("AAPL,FB,INTC"));
    assert_eq!(seen.get("limit"), Some("16"));
}

#[tokio::test]
async fn press_releases() {
    let (fmp, mock) = client();
    fmp.news().press_releases("AAPL", None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/press-releases/AAPL");
    assert!(seen.param_keys().is_empty());
}
