/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Robinhood Client
//!
//! Process settings and a thin, rate-limited HTTP client for the Robinhood REST API.
//!
//! The [`ConfigurationManager`](application::config::ConfigurationManager) holds the
//! authentication token obtained at login and the delay to wait between requests.
//! Collaborators receive a handle to it explicitly; a process-wide instance is also
//! available through [`ConfigurationManager::global`](application::config::ConfigurationManager::global).
//!
//! ```rust
//! use robinhood_client::prelude::*;
//!
//! let settings = ConfigurationManager::new();
//! assert!(settings.get_token().is_err());
//!
//! settings.set_token("abc123");
//! assert_eq!(settings.get_token().unwrap(), "abc123");
//! assert_eq!(settings.get_rate_limit(), 500);
//! ```

/// Settings holder, configuration and rate limiting
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP client and retry configuration
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
