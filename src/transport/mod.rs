/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP transport abstraction.

use crate::error::AppError;
use crate::model::http::{RequestDescriptor, TransportResponse};
use async_trait::async_trait;

/// Reqwest based transport
pub mod http_client;

pub use http_client::ReqwestTransport;

/// Performs one HTTP call
///
/// Implementations return the raw status, headers and body for any answer
/// the server gives, and [`AppError::Transport`] only when no answer was
/// received. Classification and retries belong to the connector.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes the request described by `request`
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportResponse, AppError>;
}
