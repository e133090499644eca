/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// An unparsable value is reported with `error!` and replaced by the default.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, `None` when unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .and_then(|val| val.trim().parse::<T>().ok())
}

/// Reads a required string variable
///
/// Returns an empty string (and logs an error) when the variable is unset, so
/// the value is rejected later by the connector factory rather than replaced
/// by a placeholder credential.
pub fn get_required_env(env_var: &str) -> String {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            String::new()
        }
    }
}
