/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_RETRY_DELAY_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How requests answered with 429 Too Many Requests are retried
///
/// `Config::new` fills this from `RH_MAX_RETRY_COUNT` and `RH_RETRY_DELAY_SECS`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries; `None` or `Some(0)` retries forever
    pub max_retry_count: Option<u32>,
    /// Seconds to wait before each retry; `None` uses the 10 second default
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Retries forever with the default delay
    #[must_use]
    pub fn infinite() -> Self {
        Self::default()
    }

    /// Retries at most `max_retries` times, waiting `delay_secs` before each
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Whether the `retry_count`-th retry (starting at 1) may still be sent
    #[must_use]
    pub fn allows_retry(&self, retry_count: u32) -> bool {
        match self.max_retry_count {
            None | Some(0) => true,
            Some(max) => retry_count <= max,
        }
    }

    /// Time to wait before the next retry
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS))
    }
}
