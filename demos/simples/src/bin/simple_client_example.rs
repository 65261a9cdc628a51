use robinhood_client::prelude::*;
use serde_json::Value;
use tracing::info;

/// Example fetching accounts with a token taken from the environment
///
/// Set `RH_AUTH_TOKEN` (and optionally `RH_RATE_LIMIT_MS`) before running:
/// cargo run --bin simple_client_example
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("Config: {}", config);

    let client = HttpClient::new(config)?;
    info!("Rate limit: {} ms", client.settings().get_rate_limit());

    let accounts: Value = client.get("accounts/").await?;
    info!("Accounts: {:#}", accounts);

    Ok(())
}
