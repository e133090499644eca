/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Pluggable JSON codec
pub mod codec;
/// Request descriptors and response classification
pub mod http;
/// Retry configuration for throttled requests
pub mod retry;
