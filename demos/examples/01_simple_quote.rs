use fmp_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the client (mock when FMP_EXAMPLES_USE_MOCK is set or no key is configured).
    let fmp = get_client()?;

    // 2. Fetch the quote. The body comes back exactly as the service sent it.
    println!("Fetching quote for AAPL...");
    let quote = fmp.prices().quote("AAPL").await?;

    // 3. Print the result.
    let json = quote.as_json().ok_or("expected a JSON body")?;
    println!("{}", serde_json::to_string_pretty(json)?);

    Ok(())
}
