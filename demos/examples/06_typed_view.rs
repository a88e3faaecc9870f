use fmp_demos::common::get_client;
use serde::Deserialize;

/// The subset of a quote this program cares about.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    symbol: String,
    price: f64,
    previous_close: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;

    let payload = fmp.bulk().batch_quote(&["KO", "AAPL"]).await?;
    let quotes: Vec<Quote> = payload.parse()?;

    for q in &quotes {
        let change = q.price - q.previous_close;
        println!("{:<6} {:>8.2} ({:+.2})", q.symbol, q.price, change);
    }

    Ok(())
}
