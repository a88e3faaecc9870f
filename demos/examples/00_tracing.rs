use fmp::{Period, StatementType};
use fmp_demos::common::get_client;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,fmp::api=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let fmp = get_client()?;

    let _ = fmp.prices().quote("AAPL").await?;
    let _ = fmp
        .fundamentals()
        .financial_statement("AAPL", StatementType::BalanceSheet, Period::Annual, Some(2))
        .await?;
    let _ = fmp.lookup().search("Apple", None, Some(5)).await?;

    // Rejected locally: no request is sent, nothing is logged by the dispatcher.
    if let Err(err) = fmp.fundamentals_analysis().key_metrics("AAPL", None, None).await {
        tracing::info!(error = %err, "expected rejection");
    }

    Ok(())
}
