//! Value coercion for configurer setters
//!
//! Option values arrive as strings from the environment but as typed JSON
//! values when copied between objects, so every helper accepts both.

use crate::error::CoercionError;
use serde_json::Value;
use std::str::FromStr;

/// Render a value the way it is written into the audit record
///
/// Strings are returned without quotes, `null` becomes an empty string.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse a boolean; only `true`/`false` (any case) are accepted
pub fn to_bool(value: &Value) -> Result<bool, CoercionError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(fail(other, "boolean")),
    }
}

/// Parse a signed integer
pub fn to_i64(value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| fail(value, "integer")),
        Value::String(s) => parse_trimmed(s, value, "integer"),
        other => Err(fail(other, "integer")),
    }
}

/// Parse an unsigned integer
pub fn to_u64(value: &Value) -> Result<u64, CoercionError> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| fail(value, "unsigned integer")),
        Value::String(s) => parse_trimmed(s, value, "unsigned integer"),
        other => Err(fail(other, "unsigned integer")),
    }
}

/// Parse a floating point number
pub fn to_f64(value: &Value) -> Result<f64, CoercionError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| fail(value, "number")),
        Value::String(s) => parse_trimmed(s, value, "number"),
        other => Err(fail(other, "number")),
    }
}

/// Parse a duration into milliseconds
///
/// Plain numbers are milliseconds. Strings may carry one unit suffix:
/// `ms`, `s`, `m` or `h`.
///
/// # Example
///
/// ```rust
/// use confbind::configurer::coerce::to_millis;
/// use serde_json::Value;
///
/// assert_eq!(to_millis(&Value::from("1500")).unwrap(), 1500);
/// assert_eq!(to_millis(&Value::from("5s")).unwrap(), 5000);
/// assert_eq!(to_millis(&Value::from("2m")).unwrap(), 120_000);
/// ```
pub fn to_millis(value: &Value) -> Result<u64, CoercionError> {
    let text = match value {
        Value::String(s) => s.trim(),
        _ => return to_u64(value).map_err(|_| fail(value, "duration")),
    };

    let (digits, factor) = if let Some(n) = text.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = text.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = text.strip_suffix('m') {
        (n, 60_000)
    } else if let Some(n) = text.strip_suffix('h') {
        (n, 3_600_000)
    } else {
        (text, 1)
    };

    digits
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(factor))
        .ok_or_else(|| fail(value, "duration"))
}

fn parse_trimmed<T: FromStr>(text: &str, value: &Value, expected: &'static str) -> Result<T, CoercionError> {
    text.trim().parse::<T>().map_err(|_| fail(value, expected))
}

fn fail(value: &Value, expected: &'static str) -> CoercionError {
    CoercionError {
        value: to_text(value),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("abc")), "abc");
        assert_eq!(to_text(&json!(42)), "42");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&Value::Null), "");
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool(&json!("TRUE")).unwrap());
        assert!(!to_bool(&json!("false")).unwrap());
        assert!(to_bool(&json!(true)).unwrap());
        let err = to_bool(&json!("yes")).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert yes to boolean");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_i64(&json!(" -12 ")).unwrap(), -12);
        assert_eq!(to_i64(&json!(7)).unwrap(), 7);
        assert!(to_i64(&json!(1.5)).is_err());
        assert!(to_u64(&json!("-1")).is_err());
        assert_eq!(to_u64(&json!("1000")).unwrap(), 1000);
        assert_eq!(to_f64(&json!("0.25")).unwrap(), 0.25);
        assert!(to_f64(&json!([1])).is_err());
    }

    #[test]
    fn test_to_millis() {
        assert_eq!(to_millis(&json!(250)).unwrap(), 250);
        assert_eq!(to_millis(&json!("250ms")).unwrap(), 250);
        assert_eq!(to_millis(&json!("3s")).unwrap(), 3_000);
        assert_eq!(to_millis(&json!("1h")).unwrap(), 3_600_000);
        assert!(to_millis(&json!("soon")).is_err());
        assert!(to_millis(&json!(-5)).is_err());
    }
}
