/// Configuration and the shared settings holder
pub mod config;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
