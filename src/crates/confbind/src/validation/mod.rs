//! Fluent validation for keys, options and settings
//!
//! # Example
//!
//! ```rust
//! use confbind::validation::Validator;
//!
//! Validator::new("camel.component.", "prefix")
//!     .not_empty()
//!     .ends_with(".")
//!     .validate()
//!     .unwrap();
//!
//! assert!(Validator::new("", "option").not_empty().validate().is_err());
//! ```

use crate::error::AggregationError;
use std::fmt;

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationFailure {}

/// Validation rule for a value
pub trait ValidationRule<T> {
    /// `Ok(())` if valid, `Err` with a message otherwise
    fn check(&self, value: &T, field_name: &str) -> Result<(), String>;
}

struct FnRule<F>(F);

impl<T, F> ValidationRule<T> for FnRule<F>
where
    F: Fn(&T, &str) -> Result<(), String>,
{
    fn check(&self, value: &T, field_name: &str) -> Result<(), String> {
        (self.0)(value, field_name)
    }
}

/// Chainable validator over one value
pub struct Validator<T> {
    value: T,
    field_name: String,
    rules: Vec<Box<dyn ValidationRule<T>>>,
}

impl<T: 'static> Validator<T> {
    pub fn new(value: T, field_name: impl Into<String>) -> Self {
        Self {
            value,
            field_name: field_name.into(),
            rules: Vec::new(),
        }
    }

    /// Add a custom rule
    pub fn custom<F>(self, rule: F) -> Self
    where
        F: Fn(&T) -> Result<(), String> + 'static,
    {
        self.rule(move |value: &T, _field: &str| rule(value))
    }

    fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&T, &str) -> Result<(), String> + 'static,
    {
        self.rules.push(Box::new(FnRule(rule)));
        self
    }

    /// Stop at the first failing rule
    pub fn validate(self) -> Result<T, ValidationFailure> {
        for rule in &self.rules {
            rule.check(&self.value, &self.field_name)
                .map_err(|message| ValidationFailure {
                    field: self.field_name.clone(),
                    message,
                })?;
        }
        Ok(self.value)
    }

    /// Run every rule and collect all messages
    pub fn validate_all(self) -> Result<T, Vec<String>> {
        let errors: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(&self.value, &self.field_name).err())
            .collect();

        if errors.is_empty() {
            Ok(self.value)
        } else {
            Err(errors)
        }
    }
}

impl<S: AsRef<str> + 'static> Validator<S> {
    /// String must not be empty
    pub fn not_empty(self) -> Self {
        self.rule(|value: &S, field: &str| {
            if value.as_ref().is_empty() {
                Err(format!("{} is empty", field))
            } else {
                Ok(())
            }
        })
    }

    /// String must end with `suffix`
    pub fn ends_with(self, suffix: &'static str) -> Self {
        self.rule(move |value: &S, field: &str| {
            if value.as_ref().ends_with(suffix) {
                Ok(())
            } else {
                Err(format!("{} must end with '{}' (got '{}')", field, suffix, value.as_ref()))
            }
        })
    }

    /// String must not contain whitespace
    pub fn no_whitespace(self) -> Self {
        self.rule(|value: &S, field: &str| {
            if value.as_ref().chars().any(char::is_whitespace) {
                Err(format!("{} must not contain whitespace (got '{}')", field, value.as_ref()))
            } else {
                Ok(())
            }
        })
    }
}

/// Option name and value of a discovered key must both be non-empty
pub fn ensure_option_and_value(key: &str, option: &str, value: &str) -> Result<(), AggregationError> {
    if Validator::new(option.to_string(), "option").not_empty().validate().is_err() {
        return Err(AggregationError::EmptyOption { key: key.to_string() });
    }
    if Validator::new(value.to_string(), "value").not_empty().validate().is_err() {
        return Err(AggregationError::EmptyValue { key: key.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(Validator::new("x", "name").not_empty().validate().is_ok());
        let err = Validator::new("", "name").not_empty().validate().unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "name is empty");
    }

    #[test]
    fn test_ends_with_and_whitespace() {
        let errors = Validator::new("camel component", "prefix")
            .ends_with(".")
            .no_whitespace()
            .validate_all()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_custom_rule() {
        let result = Validator::new(String::from("CAMEL_"), "prefix")
            .custom(|v| {
                if v.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
                    Ok(())
                } else {
                    Err("prefix must be uppercase".to_string())
                }
            })
            .validate();
        assert_eq!(result.unwrap(), "CAMEL_");
    }

    #[test]
    fn test_ensure_option_and_value() {
        assert!(ensure_option_and_value("k", "opt", "v").is_ok());
        assert_eq!(
            ensure_option_and_value("camel.component.seda", "", "v"),
            Err(AggregationError::EmptyOption {
                key: "camel.component.seda".to_string()
            })
        );
        assert_eq!(
            ensure_option_and_value("camel.component.seda.size", "size", ""),
            Err(AggregationError::EmptyValue {
                key: "camel.component.seda.size".to_string()
            })
        );
    }
}
