/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request and response model of a single API call.
//!
//! Everything here is pure: descriptors are built without I/O and responses
//! are classified without touching the network, so the connector's retry
//! loop only glues these pieces to a [`Transport`](crate::transport::Transport).

use crate::constants::{
    AUTH_CLIENT_HEADER, AUTH_TOKEN_HEADER, JSON_CONTENT_TYPE, RETRY_AFTER_HEADER,
};
use crate::error::AppError;
use crate::model::codec::JsonCodec;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods used by the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `GET`, exposed as `fetch`
    Get,
    /// `PUT`, exposed as `replace`
    Put,
    /// `POST`, exposed as `create`
    Post,
    /// `DELETE`, exposed as `remove`
    Delete,
}

impl Verb {
    /// Method name as sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb carry a body
    #[must_use]
    pub fn carries_body(&self) -> bool {
        matches!(self, Verb::Put | Verb::Post)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Put => Method::PUT,
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Fully specified description of one outgoing HTTP call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Absolute URL
    pub url: String,
    /// HTTP method
    pub method: Verb,
    /// Request headers, identical for every verb
    pub headers: BTreeMap<String, String>,
    /// Encoded JSON body, only for `PUT` and `POST`
    pub body: Option<Vec<u8>>,
}

/// Raw answer returned by a [`Transport`](crate::transport::Transport)
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers (case-insensitive lookup)
    pub headers: HeaderMap,
    /// Raw body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Builds a response without headers
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body as text, replacing invalid UTF-8
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Classification of one attempt, driving the retry-or-return decision
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Status 200 with a decodable body
    Success(Value),
    /// Status 429; seconds to wait before retrying, safety margin included
    Throttled(u64),
    /// Any other result
    Failure(AppError),
}

/// Ensures the endpoint starts with exactly one `/` added by us
///
/// At most one leading `/` is stripped before prefixing, so
/// `normalize_endpoint("products")` and `normalize_endpoint("/products")`
/// both yield `"/products"`.
#[must_use]
pub fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.strip_prefix('/').unwrap_or(endpoint);
    format!("/{trimmed}")
}

/// Builds the descriptor for one attempt
///
/// The body is encoded here, once per attempt, and dropped for verbs that do
/// not carry one.
pub fn build_request_descriptor(
    base_url: &str,
    client_id: &str,
    oauth_token: &str,
    method: Verb,
    endpoint: &str,
    body: Option<&Value>,
    codec: &dyn JsonCodec,
) -> Result<RequestDescriptor, AppError> {
    let mut headers = BTreeMap::new();
    headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
    headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
    headers.insert(AUTH_CLIENT_HEADER.to_string(), client_id.to_string());
    headers.insert(AUTH_TOKEN_HEADER.to_string(), oauth_token.to_string());

    let body = match body {
        Some(value) if method.carries_body() => Some(codec.encode(value)?),
        _ => None,
    };

    Ok(RequestDescriptor {
        url: format!("{base_url}{}", normalize_endpoint(endpoint)),
        method,
        headers,
        body,
    })
}

/// Reads the server mandated wait, in whole seconds
///
/// Looks at `X-Retry-After` first and falls back to the standard
/// `Retry-After`. Only the leading digits are read, so `"3.5"` gives 3.
/// Absent or non-numeric values count as zero.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER_HEADER)
        .or_else(|| headers.get(RETRY_AFTER))
        .and_then(|value| value.to_str().ok())
        .and_then(leading_seconds)
        .unwrap_or(0)
}

fn leading_seconds(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse::<u64>().ok()
}

/// Classifies the result of one attempt
///
/// Only an exact `200 OK` is a success; other 2xx codes such as `201` or
/// `204` are reported as [`AppError::Remote`].
pub fn classify_response(
    result: Result<TransportResponse, AppError>,
    codec: &dyn JsonCodec,
    safety_margin_secs: u64,
) -> ResponseOutcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => return ResponseOutcome::Failure(e),
    };

    match response.status {
        StatusCode::OK => match codec.decode(&response.body) {
            Ok(value) => ResponseOutcome::Success(value),
            Err(e) => ResponseOutcome::Failure(AppError::MalformedPayload {
                body: response.body_text(),
                reason: e.to_string(),
            }),
        },
        StatusCode::TOO_MANY_REQUESTS => ResponseOutcome::Throttled(
            parse_retry_after(&response.headers).saturating_add(safety_margin_secs),
        ),
        status => ResponseOutcome::Failure(AppError::Remote {
            status,
            body: response.body_text(),
        }),
    }
}
