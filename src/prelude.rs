/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Robinhood Client Prelude
//!
//! Re-exports the types needed by most callers.
//!
//! ```rust
//! use robinhood_client::prelude::*;
//!
//! let settings = ConfigurationManager::new();
//! settings.set_rate_limit(750);
//! assert_eq!(settings.get_rate_limit(), 750);
//! ```

// ============================================================================
// CONFIGURATION AND SETTINGS
// ============================================================================

/// Configuration and shared settings
pub use crate::application::config::{Config, ConfigurationManager, RestApiConfig, Settings};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client
pub use crate::model::http::HttpClient;

/// Retry configuration
pub use crate::model::retry::RetryConfig;

/// Rate limiter
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest's method type for custom requests
pub use reqwest::Method;
