/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::{Config, ConfigurationManager};
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{AUTH_SCHEME, USER_AGENT};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

/// Thin REST client that authenticates with the stored token and spaces out requests
///
/// The token and the delay between requests are read from the shared
/// [`ConfigurationManager`] on every call, so updating them through any handle
/// takes effect on the next request.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    settings: ConfigurationManager,
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl HttpClient {
    /// Creates a new client with its own settings seeded from `config`
    ///
    /// # Errors
    ///
    /// `AppError::Network` if the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let settings = ConfigurationManager::from_config(&config);
        Self::with_settings(config, settings)
    }

    /// Creates a new client sharing an existing settings manager
    ///
    /// The token and delay in `config.settings` are ignored in favour of the
    /// manager's current values.
    ///
    /// # Errors
    ///
    /// `AppError::Network` if the underlying HTTP client cannot be built.
    pub fn with_settings(config: Config, settings: ConfigurationManager) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(Mutex::new(RateLimiter::new(settings.rate_limit_delay())));

        Ok(Self {
            http_client,
            config: Arc::new(config),
            settings,
            rate_limiter,
        })
    }

    /// The settings manager used by this client
    pub fn settings(&self) -> &ConfigurationManager {
        &self.settings
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes an authenticated GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>, true).await
    }

    /// Makes an authenticated POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body), true).await
    }

    /// Makes an authenticated DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<()>, true).await
    }

    /// Makes a GET request without the `Authorization` header
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>, false).await
    }

    /// Makes a POST request without the `Authorization` header, e.g. the login call
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body), false).await
    }

    /// Makes a request, attaching the stored token when `authenticated` is set
    ///
    /// # Errors
    ///
    /// `AppError::TokenMissing` before anything is sent if `authenticated` is set
    /// and no token is stored; otherwise whatever [`make_http_request`] returns.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
        authenticated: bool,
    ) -> Result<T, AppError> {
        let auth_header_value = if authenticated {
            Some(format!("{} {}", AUTH_SCHEME, self.settings.get_token()?))
        } else {
            None
        };

        let url = self.build_url(path);

        let mut headers = vec![("Accept", "application/json")];
        if body.is_some() {
            headers.push(("Content-Type", "application/json; charset=UTF-8"));
        }
        if let Some(value) = &auth_header_value {
            headers.push(("Authorization", value.as_str()));
        }

        self.sync_rate_limit().await;

        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            &body,
            self.config.retry.clone(),
        )
        .await?;

        self.parse_response(response).await
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            let base = self.config.rest_api.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Swaps in a limiter with the new delay if it changed since the last request
    ///
    /// The replacement keeps the time of the last permit, so the next request
    /// still waits the new delay after the previous one.
    async fn sync_rate_limit(&self) {
        let delay = self.settings.rate_limit_delay();
        let mut limiter = self.rate_limiter.lock().await;
        if limiter.delay() != delay {
            debug!("Rate limit changed to {:?}, rebuilding limiter", delay);
            *limiter = limiter.with_delay(delay);
        }
    }

    /// Parses response, treating an empty body as JSON `null`
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let text = response.text().await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Makes an HTTP request with rate limiting and retry on 429 responses
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter waited on before every attempt
/// * `method` - HTTP method (GET, POST, PUT, DELETE, etc.)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (will be serialized to JSON)
/// * `retry_config` - Retry configuration (max retries and delay)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - `RateLimitExceeded` once retries run out, `Unauthorized`
///   on 401, `NotFound` on 404, `Unexpected` for any other failure status
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
    retry_config: RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count: u32 = 0;
    let retry_delay = retry_config.delay();

    loop {
        {
            let mut limiter = rate_limiter.lock().await;
            limiter.wait().await;
        }

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url);
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                retry_count += 1;

                if !retry_config.allows_retry(retry_count) {
                    error!(
                        "Rate limit exceeded after {} retries on {}",
                        retry_count - 1,
                        url
                    );
                    return Err(AppError::RateLimitExceeded);
                }

                warn!(
                    "Rate limit exceeded (retry {}). Waiting {:?} before retrying...",
                    retry_count, retry_delay
                );
                tokio::time::sleep(retry_delay).await;
            }
            StatusCode::UNAUTHORIZED => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Unauthorized: {}", body_text);
                return Err(AppError::Unauthorized);
            }
            StatusCode::NOT_FOUND => {
                debug!("Not found: {}", url);
                return Err(AppError::NotFound);
            }
            _ => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body_text);
                return Err(AppError::Unexpected(status));
            }
        }
    }
}
