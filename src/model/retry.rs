/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::THROTTLE_SAFETY_MARGIN_SECS;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Policy applied when the API answers `429 Too Many Requests`
///
/// The default retries forever with a fixed delay (server wait plus safety
/// margin). A retry cap and exponential growth are opt-in.
#[derive(Debug, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries on throttling (None or 0 = infinite retries)
    pub max_retry_count: Option<u32>,
    /// Seconds added to the server mandated wait
    pub safety_margin_secs: u64,
    /// Doubles the delay on every consecutive throttled attempt
    pub exponential_backoff: bool,
    /// Upper bound for the exponential growth (None = unbounded)
    pub max_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration with infinite retries and a fixed delay
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration with infinite retries and a fixed delay
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            safety_margin_secs: THROTTLE_SAFETY_MARGIN_SECS,
            exponential_backoff: false,
            max_delay_secs: None,
        }
    }

    /// Creates a retry configuration that gives up after `max_retries` retries
    ///
    /// `0` keeps retrying forever, like [`RetryConfig::infinite`].
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            ..Self::infinite()
        }
    }

    /// Replaces the safety margin added to the server mandated wait
    #[must_use]
    pub fn with_safety_margin(mut self, secs: u64) -> Self {
        self.safety_margin_secs = secs;
        self
    }

    /// Enables exponential growth of the delay, capped at `max_delay_secs`
    #[must_use]
    pub fn with_exponential_backoff(mut self, max_delay_secs: u64) -> Self {
        self.exponential_backoff = true;
        self.max_delay_secs = Some(max_delay_secs);
        self
    }

    /// Reads the policy from the environment
    ///
    /// Unset variables keep the compatible default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_retry_count: get_env_or_none("BC_MAX_RETRY_COUNT"),
            safety_margin_secs: get_env_or_default(
                "BC_THROTTLE_MARGIN_SECS",
                THROTTLE_SAFETY_MARGIN_SECS,
            ),
            exponential_backoff: get_env_or_default("BC_EXPONENTIAL_BACKOFF", false),
            max_delay_secs: get_env_or_none("BC_MAX_RETRY_DELAY_SECS"),
        }
    }

    /// Gets the maximum retry count (0 = infinite)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(0)
    }

    /// True when another retry is allowed after `retries_done` retries
    #[must_use]
    pub fn allows_retry(&self, retries_done: u32) -> bool {
        match self.max_retry_count {
            Some(0) | None => true,
            Some(max) => retries_done < max,
        }
    }

    /// Delay before retry number `retry` (1-based)
    ///
    /// `throttle_secs` already includes the safety margin. `max_delay_secs`
    /// only bounds the exponential growth; the result is never shorter than
    /// `throttle_secs`.
    #[must_use]
    pub fn delay_for(&self, retry: u32, throttle_secs: u64) -> Duration {
        if !self.exponential_backoff {
            return Duration::from_secs(throttle_secs);
        }

        let shift = retry.saturating_sub(1).min(32);
        let mut secs = throttle_secs.saturating_mul(1u64 << shift);
        if let Some(max) = self.max_delay_secs {
            secs = secs.min(max).max(throttle_secs);
        }
        Duration::from_secs(secs)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::infinite()
    }
}
