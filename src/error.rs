/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type returned by every fallible operation of the crate.

use reqwest::StatusCode;
use std::fmt;

/// Errors surfaced by the connector and its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Required credentials or host were missing when building a connector
    Configuration(String),
    /// The HTTP call could not complete (DNS, connection, timeout)
    Transport(String),
    /// The server answered with a status other than 200 or 429
    Remote {
        /// Status returned by the server
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// The server answered 200 but the body is not valid JSON
    MalformedPayload {
        /// Raw response body
        body: String,
        /// Decoder message
        reason: String,
    },
    /// A request body could not be encoded
    Serialization(String),
    /// A decoded payload does not match the requested type
    Deserialization(String),
    /// Throttled more times than the configured retry cap allows
    RateLimitExceeded {
        /// Number of attempts made, including the first one
        attempts: u32,
    },
}

impl AppError {
    /// True for errors reported by the remote server
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::MalformedPayload { .. })
    }

    /// True when the HTTP call itself failed
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Raw response body carried by remote errors
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Remote { body, .. } | Self::MalformedPayload { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Transport(msg) => write!(f, "transport error: {msg}"),
            AppError::Remote { status, body } => {
                write!(f, "remote error: status {status}: {body}")
            }
            AppError::MalformedPayload { reason, .. } => {
                write!(f, "malformed payload: {reason}")
            }
            AppError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::RateLimitExceeded { attempts } => {
                write!(f, "rate limit exceeded after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}
