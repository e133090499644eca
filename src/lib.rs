/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # BigCommerce Client
//!
//! A connector for the BigCommerce catalog REST API (v3) scoped to a single
//! merchant store.
//!
//! The [`Connector`](application::connector::Connector) owns the store
//! credentials and exposes four verbs:
//!
//! | Verb      | HTTP method | Body |
//! |-----------|-------------|------|
//! | `fetch`   | `GET`       | no   |
//! | `replace` | `PUT`       | yes  |
//! | `create`  | `POST`      | yes  |
//! | `remove`  | `DELETE`    | no   |
//!
//! Every call is classified into success, throttled or failure. Throttled
//! calls (`429 Too Many Requests`) are retried transparently after the wait
//! the server asks for plus a two second margin; callers only ever see the
//! decoded payload or an [`AppError`](error::AppError).
//!
//! ## Example
//!
//! ```ignore
//! use bigcommerce_client::prelude::*;
//! use serde_json::Value;
//!
//! let config = Config::new();
//! let connector = Connector::new(config)?;
//!
//! let product: Value = connector.fetch("products/42").await?;
//! ```

/// Application layer: configuration, connector and request pacing
pub mod application;
/// Fixed values shared across the crate
pub mod constants;
/// Error type for every fallible operation
pub mod error;
/// Request/response model, codec and retry policy
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Transport abstraction over the HTTP client
pub mod transport;
/// Environment, logging and timer helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
