use robinhood_client::prelude::*;
use tracing::info;

/// Example showing the shared settings holder
///
/// Run with: cargo run --bin simple_settings
fn main() {
    setup_logger();

    let settings = ConfigurationManager::new();
    match settings.get_token() {
        Ok(_) => info!("Token already present"),
        Err(e) => info!("Before login: {e}"),
    }

    settings.set_token("example-token");
    settings.set_rate_limit(1000);

    let handle = settings.clone();
    info!("Token visible through clone: {}", handle.has_token());
    info!("Delay between requests: {:?}", handle.rate_limit_delay());
    info!("Settings: {}", settings.snapshot());
}
