use fmp::{AsReportedStatement, Period, ReportPeriod, StatementType};

use crate::helpers::{client, last};

#[tokio::test]
async fn statement_without_limit_has_no_limit_key() {
    let (fmp, mock) = client();
    let payload = fmp
        .fundamentals()
        .financial_statement("AAPL", StatementType::IncomeStatement, Period::Annual, None)
        .await
        .unwrap();

    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/income-statement/AAPL");
    assert_eq!(seen.keys(), vec!["period", "apikey"]);
    assert_eq!(seen.get("period"), Some("annual"));
    assert_eq!(payload.as_json().and_then(|v| v.as_array()).map(Vec::len), Some(5));
}

#[tokio::test]
async fn statement_with_limit() {
    let (fmp, mock) = client();
    let payload = fmp
        .fundamentals()
        .financial_statement("AAPL", StatementType::CashFlow, Period::Quarter, Some(2))
        .await
        .unwrap();

    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/cash-flow-statement/AAPL");
    assert_eq!(seen.keys(), vec!["period", "limit", "apikey"]);
    assert_eq!(seen.get("limit"), Some("2"));
    assert_eq!(payload.as_json().and_then(|v| v.as_array()).map(Vec::len), Some(2));
}

#[tokio::test]
async fn as_reported_statements() {
    let (fmp, mock) = client();
    fmp.fundamentals()
        .financial_statement_as_reported("AAPL", AsReportedStatement::Full, Period::Quarter, None)
        .await
        .unwrap();
    assert_eq!(
        last(&mock).await.path,
        "v3/financial-statement-full-as-reported/AAPL"
    );

    fmp.fundamentals()
        .financial_statement_as_reported(
            "AAPL",
            StatementType::BalanceSheet.into(),
            Period::Annual,
            Some(3),
        )
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v3/balance-sheet-statement-as-reported/AAPL");
    assert_eq!(seen.get("limit"), Some("3"));
}

#[tokio::test]
async fn symbol_list_and_filings() {
    let (fmp, mock) = client();
    fmp.fundamentals().financial_statement_list().await.unwrap();
    assert_eq!(last(&mock).await.path, "v3/financial-statement-symbol-lists");

    fmp.fundamentals().financial_report_dates("AAPL").await.unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/financial-reports-dates");
    assert_eq!(seen.get("symbol"), Some("AAPL"));

    fmp.fundamentals()
        .annual_report("AAPL", 2020, ReportPeriod::FullYear)
        .await
        .unwrap();
    let seen = last(&mock).await;
    assert_eq!(seen.path, "v4/financial-reports-json");
    assert_eq!(seen.param_keys(), vec!["symbol", "year", "period"]);
    assert_eq!(seen.get("year"), Some("2020"));
    assert_eq!(seen.get("period"), Some("FY"));

    fmp.fundamentals().shares_float("AAPL").await.unwrap();
    assert_eq!(last(&mock).await.path, "v4/shares_float");
}
