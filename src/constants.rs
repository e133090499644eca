/// Default BigCommerce API host
pub const DEFAULT_API_HOST: &str = "https://api.bigcommerce.com";
/// Path segment between the store hash and the resource endpoint
pub const CATALOG_API_PATH: &str = "/v3/catalog";
/// Path segment preceding the store hash
pub const STORES_PATH: &str = "/stores/";
/// Header carrying the application client id
pub const AUTH_CLIENT_HEADER: &str = "X-Auth-Client";
/// Header carrying the store OAuth token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
/// Header in which the API announces how many seconds to wait after a 429
pub const RETRY_AFTER_HEADER: &str = "X-Retry-After";
/// Media type for both request and response bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Seconds added on top of the server mandated wait before retrying
pub const THROTTLE_SAFETY_MARGIN_SECS: u64 = 2;
/// Default timeout in seconds for a single HTTP call
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("bigcommerce-client/", env!("CARGO_PKG_VERSION"));
