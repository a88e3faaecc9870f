use fmp_demos::common::get_client;
use futures::future::join_all;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;
    let tickers = ["AAPL", "MSFT", "GOOGL", "NVDA", "FAIL"];

    // The client never fans out itself; concurrency is the caller's choice.
    let results = join_all(tickers.iter().map(|t| fmp.prices().quote(t))).await;

    println!("{:<8} | {:>10}", "Symbol", "Price");
    println!("{:-<9}|{:-<12}", "", "");
    for (ticker, res) in tickers.iter().zip(results) {
        match res {
            Ok(payload) => {
                let price = payload
                    .as_json()
                    .and_then(|v| v.get(0))
                    .and_then(|q| q["price"].as_f64());
                match price {
                    Some(p) => println!("{ticker:<8} | {p:>10.2}"),
                    None => println!("{ticker:<8} | {:>10}", "n/a"),
                }
            }
            Err(e) => println!("{ticker:<8} | error: {e}"),
        }
    }

    Ok(())
}
