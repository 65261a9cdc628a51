/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The authentication token was requested before one was set
    TokenMissing,
    /// The API kept answering 429 after all retries
    RateLimitExceeded,
    /// The API rejected the credentials (401)
    Unauthorized,
    /// The requested resource does not exist (404)
    NotFound,
    /// Any other non-success status code
    Unexpected(StatusCode),
    /// Invalid argument supplied by the caller
    InvalidInput(String),
    /// Transport level failure
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::TokenMissing => {
                write!(f, "authentication token not found, log in before calling the api")
            }
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
