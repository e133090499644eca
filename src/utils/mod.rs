/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing the timer capability used for throttle backoff
pub mod timer;

pub use logger::*;
pub use timer::*;
