use assert_json_diff::assert_json_eq;
use robinhood_client::application::config::{
    Config, ConfigurationManager, RestApiConfig, Settings,
};
use robinhood_client::model::retry::RetryConfig;
use serde_json::json;
use std::env;

fn sample_config() -> Config {
    Config {
        rest_api: RestApiConfig {
            base_url: "https://api.robinhood.com".to_string(),
            timeout: 30,
        },
        settings: Settings {
            auth_token: Some("do-not-print".to_string()),
            rate_limit_ms: 500,
        },
        retry: RetryConfig::with_max_retries_and_delay(3, 5),
    }
}

#[test]
fn test_settings_default() {
    let settings = Settings::default();
    assert_eq!(settings.auth_token, None);
    assert_eq!(settings.rate_limit_ms, 500);
}

#[test]
fn test_serialized_config_omits_token() {
    let config = sample_config();
    let value = serde_json::to_value(&config).unwrap();

    assert_json_eq!(
        value,
        json!({
            "rest_api": { "base_url": "https://api.robinhood.com", "timeout": 30 },
            "settings": { "rate_limit_ms": 500 },
            "retry": { "max_retry_count": 3, "retry_delay_secs": 5 }
        })
    );
    assert!(!config.to_string().contains("do-not-print"));
    assert!(!format!("{config:?}").contains("do-not-print"));
}

#[test]
fn test_settings_deserialize_without_token() {
    let settings: Settings = serde_json::from_str(r#"{"rate_limit_ms": 250}"#).unwrap();
    assert_eq!(settings.auth_token, None);
    assert_eq!(settings.rate_limit_ms, 250);
}

#[test]
fn test_manager_from_config() {
    let manager = ConfigurationManager::from_config(&sample_config());
    assert_eq!(manager.get_token().unwrap(), "do-not-print");
    assert_eq!(manager.get_rate_limit(), 500);
}

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("RH_REST_BASE_URL", "http://localhost:9999");
        env::set_var("RH_REST_TIMEOUT", "5");
        env::set_var("RH_AUTH_TOKEN", "env-token");
        env::set_var("RH_RATE_LIMIT_MS", "not-a-number");
        env::set_var("RH_MAX_RETRY_COUNT", "4");
        env::remove_var("RH_RETRY_DELAY_SECS");

        let config = Config::new();

        env::remove_var("RH_REST_BASE_URL");
        env::remove_var("RH_REST_TIMEOUT");
        env::remove_var("RH_AUTH_TOKEN");
        env::remove_var("RH_RATE_LIMIT_MS");
        env::remove_var("RH_MAX_RETRY_COUNT");

        assert_eq!(config.rest_api.base_url, "http://localhost:9999");
        assert_eq!(config.rest_api.timeout, 5);
        assert_eq!(config.settings.auth_token.as_deref(), Some("env-token"));
        // invalid value falls back to the default
        assert_eq!(config.settings.rate_limit_ms, 500);
        assert_eq!(config.retry.max_retry_count, Some(4));
        assert_eq!(config.retry.retry_delay_secs, None);
    }
}
