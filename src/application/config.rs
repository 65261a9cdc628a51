/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_MS, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Mutable settings shared by everything that talks to the API
pub struct Settings {
    /// Authentication token of the logged in user, if any. Never serialized.
    #[serde(skip_serializing, default)]
    pub auth_token: Option<String>,
    /// Minimum delay in milliseconds between outgoing requests
    pub rate_limit_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_token: None,
            rate_limit_ms: DEFAULT_RATE_LIMIT_MS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Initial token and request delay
    pub settings: Settings,
    /// Retry behaviour on 429 responses
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    ///
    /// Recognised variables: `RH_REST_BASE_URL`, `RH_REST_TIMEOUT`, `RH_AUTH_TOKEN`,
    /// `RH_RATE_LIMIT_MS`, `RH_MAX_RETRY_COUNT` and `RH_RETRY_DELAY_SECS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("RH_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("RH_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            settings: Settings {
                auth_token: get_env_or_none("RH_AUTH_TOKEN"),
                rate_limit_ms: get_env_or_default("RH_RATE_LIMIT_MS", DEFAULT_RATE_LIMIT_MS),
            },
            retry: RetryConfig {
                max_retry_count: get_env_or_none("RH_MAX_RETRY_COUNT"),
                retry_delay_secs: get_env_or_none("RH_RETRY_DELAY_SECS"),
            },
        }
    }
}

static GLOBAL: Lazy<ConfigurationManager> = Lazy::new(ConfigurationManager::new);

/// Thread-safe holder of the authentication token and request delay
///
/// Cloning a manager yields another handle to the same settings, so a login
/// routine can store the token and every client holding a clone sees it.
#[derive(Clone, Default)]
pub struct ConfigurationManager {
    inner: Arc<RwLock<Settings>>,
}

impl ConfigurationManager {
    /// Creates a manager with no token and the default 500 ms delay
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a manager seeded with the given settings
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Creates a manager seeded from the token and delay found in `config`
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(config.settings.clone())
    }

    /// Returns the process-wide manager, creating it with defaults on first use
    ///
    /// Prefer passing an explicitly constructed manager around; this exists for
    /// callers that have nowhere to keep one.
    pub fn global() -> &'static ConfigurationManager {
        &GLOBAL
    }

    // Settings are plain values, a writer that panicked cannot leave them half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Settings> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Settings> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the stored authentication token
    ///
    /// # Errors
    ///
    /// `AppError::TokenMissing` if no token has been set, which usually means
    /// the login step has not run yet.
    pub fn get_token(&self) -> Result<String, AppError> {
        self.read().auth_token.clone().ok_or(AppError::TokenMissing)
    }

    /// Stores the authentication token, replacing any previous one
    pub fn set_token(&self, token: impl Into<String>) {
        self.write().auth_token = Some(token.into());
        debug!("Authentication token updated");
    }

    /// Forgets the stored token
    pub fn clear_token(&self) {
        self.write().auth_token = None;
        debug!("Authentication token cleared");
    }

    /// Whether a token is currently stored
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.read().auth_token.is_some()
    }

    /// Returns the delay in milliseconds between requests
    #[must_use]
    pub fn get_rate_limit(&self) -> u64 {
        self.read().rate_limit_ms
    }

    /// Sets the delay in milliseconds between requests
    pub fn set_rate_limit(&self, rate_limit_ms: u64) {
        self.write().rate_limit_ms = rate_limit_ms;
        debug!("Rate limit set to {} ms", rate_limit_ms);
    }

    /// Returns the delay between requests as a `Duration`
    #[must_use]
    pub fn rate_limit_delay(&self) -> Duration {
        Duration::from_millis(self.get_rate_limit())
    }

    /// Returns a copy of the current settings
    #[must_use]
    pub fn snapshot(&self) -> Settings {
        self.read().clone()
    }

    /// Whether both handles point at the same settings
    #[must_use]
    pub fn same_instance(&self, other: &ConfigurationManager) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ConfigurationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let settings = self.read();
        f.debug_struct("ConfigurationManager")
            .field("has_token", &settings.auth_token.is_some())
            .field("rate_limit_ms", &settings.rate_limit_ms)
            .finish()
    }
}
