use crate::helpers::{assert_rejected, client, date, last};

#[tokio::test]
async fn earnings_calendar_without_range_has_no_dates() {
    let (fmp, mock) = client();
    let payload = fmp.calendars().earnings_calendar(None, None).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/earning_calendar");
    assert_eq!(seen.keys(), vec!["apikey"]);
    assert!(payload.as_json().is_some_and(serde_json::Value::is_array));
}

#[tokio::test]
async fn from_alone_and_full_range() {
    let (fmp, mock) = client();
    fmp.calendars()
        .ipo_calendar(Some(date(2024, 5, 1)), None)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/ipo_calendar");
    assert_eq!(seen.param_keys(), vec!["from"]);

    fmp.calendars()
        .dividend_calendar(Some(date(2024, 5, 1)), Some(date(2024, 5, 31)))
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/stock_dividend_calendar");
    assert_eq!(seen.get("from"), Some("2024-05-01"));
    assert_eq!(seen.get("to"), Some("2024-05-31"));
}

#[tokio::test]
async fn every_calendar_rejects_to_without_from() {
    let (fmp, mock) = client();
    let to = Some(date(2024, 1, 31));
    let cal = fmp.calendars();
    assert_rejected(cal.earnings_calendar(None, to).await, &mock).await;
    assert_rejected(cal.ipo_calendar(None, to).await, &mock).await;
    assert_rejected(cal.stock_split_calendar(None, to).await, &mock).await;
    assert_rejected(cal.dividend_calendar(None, to).await, &mock).await;
    assert_rejected(cal.economic_calendar(None, to).await, &mock).await;
}

#[tokio::test]
async fn other_calendars() {
    let (fmp, mock) = client();
    fmp.calendars()
        .historical_earnings_calendar("AAPL", 80)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/historical/earning_calendar/AAPL");
    assert_eq!(seen.get("limit"), Some("80"));

    fmp.calendars().stock_split_calendar(None, None).await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/stock_split_calendar");

    fmp.calendars().economic_calendar(None, None).await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/economic_calendar");
}
