use fmp::{Period, StatementType};
use fmp_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;

    let income = fmp
        .fundamentals()
        .financial_statement("AAPL", StatementType::IncomeStatement, Period::Annual, Some(3))
        .await?;

    println!("\n## AAPL income statement (last 3 fiscal years)");
    println!("{:<12} | {:>18} | {:>18}", "Date", "Revenue", "Net income");
    println!("{:-<13}|{:-<20}|{:-<19}", "", "", "");
    for row in income.as_json().and_then(|v| v.as_array()).into_iter().flatten() {
        println!(
            "{:<12} | {:>18} | {:>18}",
            row["date"].as_str().unwrap_or("-"),
            row["revenue"].as_i64().unwrap_or_default(),
            row["netIncome"].as_i64().unwrap_or_default(),
        );
    }

    let ratios = fmp
        .fundamentals_analysis()
        .financial_ratios("AAPL", None, None)
        .await?;
    println!("\nTTM ratios rows: {}", ratios.as_json().and_then(|v| v.as_array()).map_or(0, Vec::len));

    Ok(())
}
