/// Application configuration module
pub mod config;
/// Connector executing authenticated, throttle-aware catalog requests
pub mod connector;
/// Rate limiter module for client-side request pacing
pub mod rate_limiter;
