// Common utilities for integration tests

use robinhood_client::prelude::*;

/// Builds a config pointing at the mock server, with no delay and no retries
pub fn test_config(base_url: &str) -> Config {
    setup_logger();
    Config {
        rest_api: RestApiConfig {
            base_url: base_url.to_string(),
            timeout: 5,
        },
        settings: Settings {
            auth_token: None,
            rate_limit_ms: 0,
        },
        retry: RetryConfig::with_max_retries_and_delay(2, 0),
    }
}

/// Creates a client with its own settings and the given token
pub fn client_with_token(base_url: &str, token: &str) -> HttpClient {
    let settings = ConfigurationManager::new();
    settings.set_rate_limit(0);
    settings.set_token(token);
    HttpClient::with_settings(test_config(base_url), settings).expect("client should build")
}
