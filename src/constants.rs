/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Default delay in milliseconds between outgoing API requests
pub const DEFAULT_RATE_LIMIT_MS: u64 = 500;
/// Default base URL of the Robinhood REST API
pub const DEFAULT_BASE_URL: &str = "https://api.robinhood.com";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default delay in seconds between retries after a 429 response
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
/// Scheme used in the `Authorization` header, sent as `Token <token>`
pub const AUTH_SCHEME: &str = "Token";
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = "Rust-Robinhood-Client/0.1.0";
