/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Rate limiter module for spacing out API requests
//!
//! Uses the `governor` crate with a quota of one request per delay period and a
//! burst of one, which amounts to a minimum gap between consecutive requests.

use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

type DirectLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>;

/// Enforces a minimum delay between outgoing requests
#[derive(Clone)]
pub struct RateLimiter {
    delay: Duration,
    // None when the delay is zero
    limiter: Option<Arc<DirectLimiter>>,
    last_permit: Option<Instant>,
    // carried over from a previous limiter when the delay changes
    not_before: Option<Instant>,
}

impl RateLimiter {
    /// Creates a new rate limiter allowing one request per `delay`
    ///
    /// A zero delay disables limiting entirely.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use robinhood_client::application::rate_limiter::RateLimiter;
    /// use std::time::Duration;
    ///
    /// let limiter = RateLimiter::new(Duration::from_millis(500));
    /// ```
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let limiter =
            Quota::with_period(delay).map(|quota| Arc::new(GovernorRateLimiter::direct(quota)));

        Self {
            delay,
            limiter,
            last_permit: None,
            not_before: None,
        }
    }

    /// Creates a new rate limiter from a delay in milliseconds
    #[must_use]
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Builds a limiter with a new delay that still honours the last permit
    ///
    /// The first permit of the returned limiter is not granted before
    /// `last_permit + delay`, so changing the delay never lets a request
    /// through early.
    #[must_use]
    pub fn with_delay(&self, delay: Duration) -> Self {
        let mut next = Self::new(delay);
        next.last_permit = self.last_permit;
        next.not_before = self.last_permit.map(|at| at + delay);
        next
    }

    /// The minimum delay between requests
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the last permit was granted, if any
    #[must_use]
    pub fn last_permit(&self) -> Option<Instant> {
        self.last_permit
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&mut self) {
        if let Some(until) = self.not_before.take() {
            tokio::time::sleep_until(tokio::time::Instant::from_std(until)).await;
        }
        if let Some(limiter) = &self.limiter {
            while limiter.check().is_err() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        }
        self.last_permit = Some(Instant::now());
    }

    /// Checks if a request can be made immediately, consuming the permit if so
    #[must_use]
    pub fn check(&mut self) -> bool {
        if self.not_before.is_some_and(|until| Instant::now() < until) {
            return false;
        }
        self.not_before = None;

        let allowed = match &self.limiter {
            Some(limiter) => limiter.check().is_ok(),
            None => true,
        };
        if allowed {
            self.last_permit = Some(Instant::now());
        }
        allowed
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("delay", &self.delay)
            .field("last_permit", &self.last_permit)
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
