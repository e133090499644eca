use crate::constants::{DEFAULT_API_HOST, DEFAULT_REST_TIMEOUT_SECS};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_required_env};
use dotenv::dotenv;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Credentials of one BigCommerce store
pub struct Credentials {
    /// Store hash, the `{hash}` in `/stores/{hash}/`
    pub store_hash: String,
    /// OAuth token issued for the store
    pub oauth_token: String,
    /// Client id of the application
    pub client_id: String,
}

impl Credentials {
    /// Creates a credential set
    pub fn new(
        store_hash: impl Into<String>,
        oauth_token: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            store_hash: store_hash.into(),
            oauth_token: oauth_token.into(),
            client_id: client_id.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("store_hash", &self.store_hash)
            .field("oauth_token", &"<redacted>")
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// API host, e.g. `https://api.bigcommerce.com`
    pub host: String,
    /// Timeout in seconds for a single HTTP call
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            timeout: DEFAULT_REST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for client-side pacing of API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Everything needed to build a [`Connector`](crate::application::connector::Connector)
pub struct Config {
    /// Store credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Behaviour on `429 Too Many Requests`
    pub retry: RetryConfig,
    /// Optional client-side pacing; `None` sends requests as soon as they are issued
    pub rate_limiter: Option<RateLimiterConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Recognised variables:
    /// `BC_STORE_HASH`, `BC_OAUTH_TOKEN`, `BC_CLIENT_ID`, `BC_API_HOST`,
    /// `BC_REST_TIMEOUT`, the retry variables read by
    /// [`RetryConfig::from_env`], and `BC_RATE_LIMIT_MAX_REQUESTS`,
    /// `BC_RATE_LIMIT_PERIOD_SECONDS`, `BC_RATE_LIMIT_BURST_SIZE` (pacing is
    /// enabled only when the first one is set).
    ///
    /// Missing credentials are left empty; building a connector from such a
    /// configuration fails with a configuration error.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let rate_limiter = get_env_or_none::<u32>("BC_RATE_LIMIT_MAX_REQUESTS").map(
            |max_requests| RateLimiterConfig {
                max_requests,
                period_seconds: get_env_or_default("BC_RATE_LIMIT_PERIOD_SECONDS", 30),
                burst_size: get_env_or_default("BC_RATE_LIMIT_BURST_SIZE", max_requests),
            },
        );

        Config {
            credentials: Credentials {
                store_hash: get_required_env("BC_STORE_HASH"),
                oauth_token: get_required_env("BC_OAUTH_TOKEN"),
                client_id: get_required_env("BC_CLIENT_ID"),
            },
            rest_api: RestApiConfig {
                host: get_env_or_default("BC_API_HOST", DEFAULT_API_HOST.to_string()),
                timeout: get_env_or_default("BC_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            retry: RetryConfig::from_env(),
            rate_limiter,
        }
    }

    /// Creates a configuration from explicit values, without reading the environment
    ///
    /// Retries are infinite with a fixed delay and no client-side pacing is applied.
    pub fn with_credentials(credentials: Credentials, host: impl Into<String>) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                host: host.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            retry: RetryConfig::infinite(),
            rate_limiter: None,
        }
    }

    /// Replaces the retry policy
    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Enables client-side pacing
    #[must_use]
    pub fn rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }
}
