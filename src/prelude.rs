/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # BigCommerce Client Prelude
//!
//! Brings the commonly used types into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use bigcommerce_client::prelude::*;
//!
//! let config = Config::with_credentials(
//!     Credentials::new("store-hash", "oauth-token", "client-id"),
//!     "https://api.bigcommerce.com",
//! );
//! let connector = Connector::new(config).expect("valid configuration");
//! assert!(connector.base_url().ends_with("/stores/store-hash/v3/catalog"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration types
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CONNECTOR
// ============================================================================

/// Store-scoped catalog connector
pub use crate::application::connector::Connector;

/// Retry policy for throttled requests
pub use crate::model::retry::RetryConfig;

/// Request/response model
pub use crate::model::http::{
    RequestDescriptor, ResponseOutcome, TransportResponse, Verb, normalize_endpoint,
};

// ============================================================================
// PLUGGABLE CAPABILITIES
// ============================================================================

/// JSON codec capability
pub use crate::model::codec::{JsonCodec, SerdeJsonCodec};

/// HTTP transport capability
pub use crate::transport::{ReqwestTransport, Transport};

/// Timer capability
pub use crate::utils::timer::{Timer, TokioTimer};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
