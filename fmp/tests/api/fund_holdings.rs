use crate::helpers::{client, date, last};

#[tokio::test]
async fn holder_endpoints() {
    let (fmp, mock) = client();
    let h = fmp.fund_holdings();
    h.etf_holders("SPY").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/etf-holder/SPY");
    h.institutional_holders("AAPL").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/institutional-holder/AAPL");
    h.mutual_fund_holders("AAPL").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/mutual-fund-holder/AAPL");
    h.etf_sector_weightings("SPY").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/etf-sector-weightings/SPY");
    h.etf_country_weightings("SPY").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/etf-country-weightings/SPY");
}

#[tokio::test]
async fn form_13f_endpoints() {
    let (fmp, mock) = client();
    let h = fmp.fund_holdings();
    h.form_13f_list().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/cik_list");

    h.cik_by_company_name("Berkshire Hathaway").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/cik-search/Berkshire%20Hathaway");

    h.company_name_by_cik("0001067983").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/cik/0001067983");

    h.form_13f("0001067983", date(2023, 6, 30)).await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/form-thirteen/0001067983");
    assert_eq!(seen.get("date"), Some("2023-06-30"));

    h.form_13f_filing_dates("0001067983").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/form-thirteen-date/0001067983");

    h.cusip("000360206").await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/cusip/000360206");
}
