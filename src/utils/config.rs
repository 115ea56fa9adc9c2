/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is set but cannot be parsed is logged and replaced by the
/// default. The value itself is not logged, since some variables hold secrets.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            warn!("Failed to parse {}, using default", env_var);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` if unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}
