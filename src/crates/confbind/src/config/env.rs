//! Typed lookups over a [`VariableSource`]
//!
//! Every helper takes the source explicitly so settings can be read from the
//! process environment, from system properties or from a plain map in tests.

use crate::error::{ConfigError, Result};
use crate::source::VariableSource;
use std::str::FromStr;

/// Look up a variable
///
/// * `Ok(Some(value))` if the variable exists
/// * `Ok(None)` if it doesn't
pub fn get_env(source: &dyn VariableSource, key: &str) -> Result<Option<String>> {
    Ok(source.get(key))
}

/// Look up and parse a variable
///
/// # Example
///
/// ```rust
/// use confbind::config::get_env_parse;
/// use std::collections::BTreeMap;
///
/// let vars = BTreeMap::from([("PORT".to_string(), "8080".to_string())]);
/// let port: Option<u16> = get_env_parse(&vars, "PORT").unwrap();
/// assert_eq!(port, Some(8080));
/// ```
pub fn get_env_parse<T>(source: &dyn VariableSource, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(source, key)? {
        Some(val) => {
            let parsed = val.trim().parse::<T>().map_err(|e| {
                ConfigError::Invalid(format!("Failed to parse environment variable {}: {}", key, e))
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Look up a variable, falling back to `default`
pub fn get_env_or(source: &dyn VariableSource, key: &str, default: impl Into<String>) -> Result<String> {
    Ok(get_env(source, key)?.unwrap_or_else(|| default.into()))
}

/// Look up and parse a variable, falling back to `default` when absent
pub fn get_env_parse_or<T>(source: &dyn VariableSource, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_parse(source, key)?.unwrap_or(default))
}

/// Look up a boolean variable
///
/// Recognizes "true", "1", "yes", "on" as true and "false", "0", "no",
/// "off" as false, ignoring case. Anything else is an error.
pub fn get_env_bool(source: &dyn VariableSource, key: &str) -> Result<Option<bool>> {
    match get_env(source, key)? {
        Some(val) => {
            let result = match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "Invalid boolean value for {}: {}",
                        key, val
                    )))
                }
            };
            Ok(Some(result))
        }
        None => Ok(None),
    }
}

/// Look up a comma separated list; blank items are dropped
pub fn get_env_list(source: &dyn VariableSource, key: &str) -> Result<Option<Vec<String>>> {
    Ok(get_env(source, key)?.map(|val| {
        val.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }))
}

/// `build_env_key("CONFBIND_", "fail_if_not_set")` is `CONFBIND_FAIL_IF_NOT_SET`
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
