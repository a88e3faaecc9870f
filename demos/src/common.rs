use std::sync::Arc;

use fmp::{Fmp, FmpError};
use fmp_mock::MockTransport;

/// Environment variable that forces the mock transport.
pub const USE_MOCK_ENV: &str = "FMP_EXAMPLES_USE_MOCK";
/// Environment variable holding a real API key.
pub const API_KEY_ENV: &str = "FMP_API_KEY";

/// Return a client for demos.
///
/// Uses the fixture-backed mock when `FMP_EXAMPLES_USE_MOCK` is set or no
/// `FMP_API_KEY` is available, and the live service otherwise.
///
/// # Errors
/// Returns an error if the HTTP client cannot be initialised.
pub fn get_client() -> Result<Fmp, FmpError> {
    let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    match api_key {
        Some(key) if std::env::var_os(USE_MOCK_ENV).is_none() => Fmp::new(key),
        _ => {
            println!("--- (Using mock transport) ---");
            Fmp::builder("demo").transport(Arc::new(MockTransport::new())).build()
        }
    }
}
