/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Connector for the BigCommerce catalog API
//!
//! The connector handles, for a single store:
//! - Authentication headers on every request
//! - Endpoint normalization against the catalog base URL
//! - Transparent retry of throttled (`429`) requests
//! - Decoding of JSON payloads
//!
//! # Example
//! ```ignore
//! use bigcommerce_client::prelude::*;
//! use serde_json::{Value, json};
//!
//! let connector = Connector::new(Config::new())?;
//!
//! let modifiers: Value = connector.fetch("products/42/modifiers").await?;
//! let updated: Value = connector
//!     .replace("products/42", json!({"price": 12.5}))
//!     .await?;
//! ```

use crate::application::config::{Config, Credentials};
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{CATALOG_API_PATH, STORES_PATH};
use crate::error::AppError;
use crate::model::codec::{JsonCodec, SerdeJsonCodec};
use crate::model::http::{
    RequestDescriptor, ResponseOutcome, Verb, build_request_descriptor, classify_response,
    normalize_endpoint,
};
use crate::model::retry::RetryConfig;
use crate::transport::{ReqwestTransport, Transport};
use crate::utils::timer::{Timer, TokioTimer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Connector bound to one BigCommerce store
///
/// Credentials and the base URL are fixed at construction and never change,
/// so a connector can be cloned and used from concurrent tasks freely.
#[derive(Clone)]
pub struct Connector {
    credentials: Arc<Credentials>,
    base_url: Arc<str>,
    retry: RetryConfig,
    transport: Arc<dyn Transport>,
    codec: Arc<dyn JsonCodec>,
    timer: Arc<dyn Timer>,
    rate_limiter: Option<RateLimiter>,
}

impl Connector {
    /// Creates a connector using the `reqwest` transport
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    /// Returns [`AppError::Configuration`] if the store hash, OAuth token,
    /// client id or host is empty
    pub fn new(config: Config) -> Result<Self, AppError> {
        validate(&config)?;
        let transport = ReqwestTransport::new(&config.rest_api)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a connector executing requests through `transport`
    ///
    /// # Errors
    /// Returns [`AppError::Configuration`] if the store hash, OAuth token,
    /// client id or host is empty
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self, AppError> {
        validate(&config)?;

        let base_url = format!(
            "{}{}{}{}",
            config.rest_api.host, STORES_PATH, config.credentials.store_hash, CATALOG_API_PATH
        );
        let rate_limiter = config.rate_limiter.as_ref().map(RateLimiter::new);

        Ok(Self {
            credentials: Arc::new(config.credentials),
            base_url: base_url.into(),
            retry: config.retry,
            transport,
            codec: Arc::new(SerdeJsonCodec),
            timer: Arc::new(TokioTimer),
            rate_limiter,
        })
    }

    /// Replaces the JSON codec
    #[must_use]
    pub fn with_codec(mut self, codec: Arc<dyn JsonCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Replaces the timer used to wait out throttle delays
    #[must_use]
    pub fn with_timer(mut self, timer: Arc<dyn Timer>) -> Self {
        self.timer = timer;
        self
    }

    /// Catalog base URL: `{host}/stores/{store_hash}/v3/catalog`
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store hash this connector is bound to
    #[must_use]
    pub fn store_hash(&self) -> &str {
        &self.credentials.store_hash
    }

    /// Throttle retry policy in use
    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Absolute URL for an endpoint, with or without its leading `/`
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, normalize_endpoint(endpoint))
    }

    /// Builds the request descriptor for one attempt
    ///
    /// # Errors
    /// Returns [`AppError::Serialization`] if the codec cannot encode `body`
    pub fn request_descriptor(
        &self,
        verb: Verb,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<RequestDescriptor, AppError> {
        build_request_descriptor(
            &self.base_url,
            &self.credentials.client_id,
            &self.credentials.oauth_token,
            verb,
            endpoint,
            body,
            self.codec.as_ref(),
        )
    }

    /// Performs a `GET` on `endpoint`
    ///
    /// # Example
    /// ```ignore
    /// let product: serde_json::Value = connector.fetch("/products/1").await?;
    /// ```
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let value = self.execute(Verb::Get, endpoint, None).await?;
        decode_as(value)
    }

    /// Performs a `PUT` on `endpoint` with `body` encoded as JSON
    pub async fn replace<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: B,
    ) -> Result<T, AppError> {
        let body = to_json_value(&body)?;
        let value = self.execute(Verb::Put, endpoint, Some(body)).await?;
        decode_as(value)
    }

    /// Performs a `POST` on `endpoint` with `body` encoded as JSON
    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: B,
    ) -> Result<T, AppError> {
        let body = to_json_value(&body)?;
        let value = self.execute(Verb::Post, endpoint, Some(body)).await?;
        decode_as(value)
    }

    /// Performs a `DELETE` on `endpoint`
    pub async fn remove<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let value = self.execute(Verb::Delete, endpoint, None).await?;
        decode_as(value)
    }

    /// Executes a request until it is answered with something other than `429`
    ///
    /// Every attempt uses the same verb, endpoint and body. Transport
    /// failures, non-200 statuses and undecodable payloads are returned
    /// without retrying. Throttled attempts are retried after the server
    /// mandated wait plus the safety margin, indefinitely unless the retry
    /// policy sets a cap.
    ///
    /// # Errors
    /// - [`AppError::Transport`] if no answer was received
    /// - [`AppError::Remote`] for any status other than 200 and 429
    /// - [`AppError::MalformedPayload`] for a 200 whose body is not JSON
    /// - [`AppError::Serialization`] if the body cannot be encoded
    /// - [`AppError::RateLimitExceeded`] once a configured retry cap is reached
    pub async fn execute(
        &self,
        verb: Verb,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let mut retries: u32 = 0;

        loop {
            let request = self.request_descriptor(verb, endpoint, body.as_ref())?;

            if let Some(limiter) = &self.rate_limiter {
                limiter.wait().await;
            }

            debug!("{} {}", request.method, request.url);
            let result = self.transport.execute(&request).await;

            match classify_response(result, self.codec.as_ref(), self.retry.safety_margin_secs) {
                ResponseOutcome::Success(value) => return Ok(value),
                ResponseOutcome::Failure(e) => return Err(e),
                ResponseOutcome::Throttled(throttle_secs) => {
                    if !self.retry.allows_retry(retries) {
                        return Err(AppError::RateLimitExceeded {
                            attempts: retries + 1,
                        });
                    }
                    retries += 1;

                    let delay = self.retry.delay_for(retries, throttle_secs);
                    warn!(
                        "Rate limited on {} {} (retry {}). Waiting {} seconds before retry...",
                        verb,
                        request.url,
                        retries,
                        delay.as_secs()
                    );
                    self.timer.sleep(delay).await;
                }
            }
        }
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("retry", &self.retry)
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

fn validate(config: &Config) -> Result<(), AppError> {
    let required = [
        ("store hash", &config.credentials.store_hash),
        ("oauth token", &config.credentials.oauth_token),
        ("client id", &config.credentials.client_id),
        ("host", &config.rest_api.host),
    ];

    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Configuration(format!(
                "connector needs a non-empty {name}"
            )));
        }
    }
    Ok(())
}

fn to_json_value<B: Serialize>(body: &B) -> Result<Value, AppError> {
    serde_json::to_value(body).map_err(|e| AppError::Serialization(e.to_string()))
}

fn decode_as<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Deserialization(e.to_string()))
}
