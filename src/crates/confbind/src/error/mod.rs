//! Error types for option discovery, aggregation and binding
//!
//! # Error Hierarchy
//!
//! ```text
//! ConfigError
//! ├── Aggregation    - empty option name or value while grouping keys
//! ├── Binding        - a property could not be applied to a target
//! ├── Invalid        - engine settings failed validation
//! ├── Io             - reading a settings file failed
//! └── Serialization  - YAML/JSON settings could not be parsed
//! ```
//!
//! Unmatched environment keys are not errors: the mappers leave them in the
//! input map and move on.

mod context;

pub use context::format_error_chain;

use std::fmt;
use thiserror::Error;

/// Result type for confbind operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid key detected while grouping options
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// A property could not be bound onto its target
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// Engine settings are inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Raised while grouping canonical properties into option bags
///
/// Aggregation is fail-fast per key: the offending key is reported and the
/// caller decides whether the rest of the batch continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("Error configuring property: {key} because option is empty")]
    EmptyOption { key: String },

    #[error("Error configuring property: {key} because value is empty")]
    EmptyValue { key: String },
}

impl AggregationError {
    /// The canonical key that failed validation
    pub fn key(&self) -> &str {
        match self {
            Self::EmptyOption { key } | Self::EmptyValue { key } => key,
        }
    }
}

/// What went wrong while binding a single property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingErrorKind {
    /// The target has no property with that name
    UnknownProperty,
    /// The raw value could not be converted to the property's type
    Coercion(String),
    /// Neither the target nor the resolver supplied a configurer
    NoConfigurer,
}

/// Typed binding failure
///
/// Carries the target description, the property name, the raw value and,
/// once enriched by the binder, the option prefix and fully qualified key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingError {
    pub kind: BindingErrorKind,
    pub target: String,
    pub property: String,
    pub value: Option<String>,
    pub option_prefix: Option<String>,
    pub option_key: Option<String>,
}

impl BindingError {
    /// Property name not known by the target
    pub fn unknown_property(
        target: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: BindingErrorKind::UnknownProperty,
            target: target.into(),
            property: property.into(),
            value: Some(value.into()),
            option_prefix: None,
            option_key: None,
        }
    }

    /// Raw value could not be converted
    pub fn coercion(
        target: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
        cause: impl fmt::Display,
    ) -> Self {
        Self {
            kind: BindingErrorKind::Coercion(cause.to_string()),
            target: target.into(),
            property: property.into(),
            value: Some(value.into()),
            option_prefix: None,
            option_key: None,
        }
    }

    /// No configurer available for the target
    pub fn no_configurer(target: impl Into<String>) -> Self {
        Self {
            kind: BindingErrorKind::NoConfigurer,
            target: target.into(),
            property: String::new(),
            value: None,
            option_prefix: None,
            option_key: None,
        }
    }

    /// Key to report: the explicit key, else `prefix.property`, else the property
    pub fn resolved_key(&self) -> String {
        if let Some(key) = &self.option_key {
            return key.clone();
        }
        match &self.option_prefix {
            Some(prefix) => join_key(prefix, &self.property),
            None => self.property.clone(),
        }
    }

    /// Merge the caller's option prefix into an error that lacks a key
    ///
    /// An error that already carries an explicit key keeps it; the caller
    /// prefix is recorded either way.
    pub fn enrich(mut self, prefix: Option<&str>) -> Self {
        if self.option_prefix.is_none() {
            self.option_prefix = prefix.map(str::to_string);
        }
        if self.option_key.is_none() {
            self.option_key = Some(self.resolved_key());
        }
        self
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BindingErrorKind::NoConfigurer => {
                write!(f, "No configurer found for target: {}", self.target)
            }
            BindingErrorKind::UnknownProperty => write!(
                f,
                "Error binding property ({}={}) with name: {} on bean: {}: no such property",
                self.resolved_key(),
                self.value.as_deref().unwrap_or_default(),
                self.property,
                self.target
            ),
            BindingErrorKind::Coercion(cause) => write!(
                f,
                "Error binding property ({}={}) with name: {} on bean: {}: {}",
                self.resolved_key(),
                self.value.as_deref().unwrap_or_default(),
                self.property,
                self.target,
                cause
            ),
        }
    }
}

impl std::error::Error for BindingError {}

/// Value conversion failure reported by the coercion helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {value} to {expected}")]
pub struct CoercionError {
    pub value: String,
    pub expected: &'static str,
}

/// Join a prefix and a key with exactly one dot between them
pub(crate) fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else if prefix.ends_with('.') {
        format!("{}{}", prefix, key)
    } else {
        format!("{}.{}", prefix, key)
    }
}
