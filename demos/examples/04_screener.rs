use fmp::{ScreenerExchange, Sector, StockScreener};
use fmp_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;

    let filters = StockScreener {
        market_cap_more_than: Some(10_000_000_000.0),
        sector: Some(Sector::Technology),
        exchange: Some(ScreenerExchange::Nasdaq),
        is_actively_trading: Some(true),
        limit: Some(5),
        ..Default::default()
    };
    let hits = fmp.lookup().stock_screener(&filters).await?;

    println!("## Screener: large-cap Nasdaq technology");
    for row in hits.as_json().and_then(|v| v.as_array()).into_iter().flatten() {
        println!(
            "{:<6} {}",
            row["symbol"].as_str().unwrap_or("-"),
            row["companyName"].as_str().unwrap_or("-"),
        );
    }

    Ok(())
}
