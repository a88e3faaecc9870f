use fmp::Period;
use fmp_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;
    let ticker = "MSFT";

    // Several topical sub-clients, awaited together.
    let (profile, outlook, estimates, peers) = tokio::join!(
        fmp.company().profile(ticker),
        fmp.company().company_outlook(ticker),
        fmp.statistics().analyst_estimates(ticker, Period::Annual, Some(2)),
        fmp.company().stock_peers(ticker),
    );

    let profile = profile?;
    let row = profile.as_json().and_then(|v| v.get(0)).ok_or("no profile")?;
    println!("## {} ({ticker})", row["companyName"].as_str().unwrap_or("-"));
    println!("Sector:   {}", row["sector"].as_str().unwrap_or("-"));
    println!("Industry: {}", row["industry"].as_str().unwrap_or("-"));
    println!("CEO:      {}", row["ceo"].as_str().unwrap_or("-"));

    let outlook = outlook?;
    let insider_trades = outlook
        .as_json()
        .and_then(|v| v["insideTrades"].as_array())
        .map_or(0, Vec::len);
    println!("Recent insider trades: {insider_trades}");

    println!("Estimates payload: {}", serde_json::to_string(&estimates?.into_json())?);
    println!("Peers payload:     {}", serde_json::to_string(&peers?.into_json())?);

    Ok(())
}
