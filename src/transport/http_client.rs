/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{RequestDescriptor, TransportResponse};
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;

/// [`Transport`] implementation on top of `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate user agent and the configured timeout
    ///
    /// # Errors
    /// Returns [`AppError::Configuration`] if the underlying client cannot be built
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http_client })
    }

    /// Wraps an existing `reqwest` client
    #[must_use]
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportResponse, AppError> {
        let mut builder = self
            .http_client
            .request(Method::from(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        debug!("Response status: {}", status);

        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
