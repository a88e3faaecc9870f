use fmp::Endpoint;
use fmp_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmp = get_client()?;

    // Any documented endpoint can be reached with a raw fragment.
    let hits = fmp.request("v3/search?query=AA&limit=3").await?;
    println!("{}", serde_json::to_string_pretty(&hits.as_json())?);

    // Or with a typed descriptor, inspecting the URL first (the key is masked here).
    let endpoint = Endpoint::v3("historical-price-full")
        .segment("KO")
        .param("serietype", "line")
        .param("timeseries", 5);
    let mut url = fmp.url_for(&endpoint)?;
    let shown: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == fmp::API_KEY_PARAM { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    url.query_pairs_mut().clear().extend_pairs(shown);
    println!("GET {url}");

    let history = fmp.send(endpoint).await?;
    let closes = history
        .as_json()
        .and_then(|v| v["historical"].as_array())
        .map_or(0, Vec::len);
    println!("{closes} daily bars");

    Ok(())
}
