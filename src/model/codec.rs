/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! JSON encoding capability used for request and response bodies.

use crate::error::AppError;
use serde_json::Value;

/// Encodes request bodies and decodes response bodies
///
/// Encode failures are reported as [`AppError::Serialization`]; decode
/// failures as [`AppError::Deserialization`], which the connector turns into
/// [`AppError::MalformedPayload`] for success responses.
pub trait JsonCodec: Send + Sync {
    /// Encodes a JSON value to its text representation
    fn encode(&self, value: &Value) -> Result<Vec<u8>, AppError>;

    /// Decodes a raw body into a JSON value
    fn decode(&self, bytes: &[u8]) -> Result<Value, AppError>;
}

/// [`JsonCodec`] backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl JsonCodec for SerdeJsonCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, AppError> {
        serde_json::to_vec(value).map_err(|e| AppError::Serialization(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, AppError> {
        serde_json::from_slice(bytes).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}
