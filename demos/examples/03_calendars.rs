use chrono::NaiveDate;
use fmp_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;

    // Without a range the service picks its default window.
    let earnings = fmp.calendars().earnings_calendar(None, None).await?;
    println!("## Earnings calendar");
    for row in earnings.as_json().and_then(|v| v.as_array()).into_iter().flatten() {
        println!(
            "{} {:<6} eps {:>5} (est. {:>5})",
            row["date"].as_str().unwrap_or("-"),
            row["symbol"].as_str().unwrap_or("-"),
            row["eps"],
            row["epsEstimated"],
        );
    }

    let from = NaiveDate::from_ymd_opt(2024, 5, 1).ok_or("bad date")?;
    let to = NaiveDate::from_ymd_opt(2024, 5, 31).ok_or("bad date")?;
    let dividends = fmp.calendars().dividend_calendar(Some(from), Some(to)).await?;
    println!("\n## Dividends {from} .. {to}");
    println!("{}", serde_json::to_string_pretty(&dividends.as_json())?);

    // `to` alone is rejected before any request is made.
    match fmp.calendars().ipo_calendar(None, Some(to)).await {
        Err(e) => println!("\nRejected as expected: {e}"),
        Ok(_) => return Err("expected a rejection".into()),
    }

    Ok(())
}
