/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client-side request pacing
//!
//! BigCommerce enforces a per-store request quota and answers `429` once it
//! is exhausted. Pacing requests on the client keeps a busy caller below the
//! quota instead of relying on throttle retries alone. It is opt-in through
//! [`Config::rate_limiter`](crate::application::config::Config).

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket limiter shared by every clone of a connector
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `period_seconds`
    ///
    /// Zero values fall back to one request per period and a burst equal to
    /// the request count.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(max_requests);

        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = period / max_requests.get();

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(max_requests))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Checks if a request can be made immediately, consuming a permit if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
