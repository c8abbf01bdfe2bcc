//! Engine settings
//!
//! [`EngineConfig`] controls where options are discovered and how strictly
//! they are bound. It can be built from defaults, from `CONFBIND_*`
//! environment variables and from YAML or JSON files:
//!
//! ```rust
//! use confbind::config::{ConfigBuilder, EngineConfig};
//! use confbind::mapper::OptionStyle;
//!
//! let config = EngineConfig::build().unwrap();
//! assert_eq!(config.env_prefixes, vec!["CAMEL_"]);
//! assert_eq!(config.option_style, OptionStyle::Dotted);
//! assert!(config.fail_if_not_set);
//! ```

mod builder;
mod env;

pub use builder::ConfigBuilder;
pub use env::{
    build_env_key, get_env, get_env_bool, get_env_list, get_env_or, get_env_parse,
    get_env_parse_or,
};

use crate::error::{ConfigError, Result};
use crate::mapper::{DomainOptionMapper, OptionStyle};
use crate::registry::Domain;
use crate::source::{ProcessEnvironment, VariableSource};
use crate::validation::Validator;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default prefix for the engine's own environment variables
pub const DEFAULT_ENV_PREFIX: &str = "CONFBIND_";

/// Settings for discovery, mapping and binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Environment variable prefixes scanned for options
    pub env_prefixes: Vec<String>,
    /// System property prefixes scanned for options
    pub system_property_prefixes: Vec<String>,
    /// Unknown options and missing configurers are errors
    pub fail_if_not_set: bool,
    /// Option names are matched ignoring case
    pub ignore_case: bool,
    /// Rendering of the option part of mapped environment keys
    pub option_style: OptionStyle,
    /// Domains whose environment keys are mapped without the registries
    pub custom_domains: Vec<Domain>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            env_prefixes: vec!["CAMEL_".to_string()],
            system_property_prefixes: vec!["camel.".to_string()],
            fail_if_not_set: true,
            ignore_case: true,
            option_style: OptionStyle::Dotted,
            custom_domains: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load settings from `{prefix}*` variables of `source`, keeping defaults for unset ones
    ///
    /// Lists are comma separated: `CONFBIND_ENV_PREFIXES=CAMEL_,MY_`.
    pub fn from_source(source: &dyn VariableSource, prefix: &str) -> Result<Self> {
        let defaults = Self::default();
        let key = |name: &str| build_env_key(prefix, name);

        let custom_domains = match get_env_list(source, &key("custom_domains"))? {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<Domain>().map_err(ConfigError::Invalid))
                .collect::<Result<Vec<_>>>()?,
            None => defaults.custom_domains,
        };
        let option_style = match get_env(source, &key("option_style"))? {
            Some(style) => style.parse::<OptionStyle>().map_err(ConfigError::Invalid)?,
            None => defaults.option_style,
        };

        Ok(Self {
            env_prefixes: get_env_list(source, &key("env_prefixes"))?.unwrap_or(defaults.env_prefixes),
            system_property_prefixes: get_env_list(source, &key("system_property_prefixes"))?
                .unwrap_or(defaults.system_property_prefixes),
            fail_if_not_set: get_env_bool(source, &key("fail_if_not_set"))?
                .unwrap_or(defaults.fail_if_not_set),
            ignore_case: get_env_bool(source, &key("ignore_case"))?.unwrap_or(defaults.ignore_case),
            option_style,
            custom_domains,
        })
    }

    /// Load and validate settings from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = load_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether `domain` is mapped in custom mode
    pub fn is_custom(&self, domain: Domain) -> bool {
        self.custom_domains.contains(&domain)
    }

    /// Mapper for `domain` using the configured option style
    pub fn mapper(&self, domain: Domain) -> DomainOptionMapper {
        DomainOptionMapper::new(domain).with_style(self.option_style)
    }

    pub fn env_prefix_refs(&self) -> Vec<&str> {
        self.env_prefixes.iter().map(String::as_str).collect()
    }

    pub fn system_property_prefix_refs(&self) -> Vec<&str> {
        self.system_property_prefixes.iter().map(String::as_str).collect()
    }
}

impl ConfigBuilder for EngineConfig {
    fn validate(&self) -> Result<()> {
        let prefixes = self.env_prefixes.iter().map(|p| (p, "env_prefixes")).chain(
            self.system_property_prefixes
                .iter()
                .map(|p| (p, "system_property_prefixes")),
        );
        for (prefix, field) in prefixes {
            Validator::new(prefix.clone(), field)
                .not_empty()
                .no_whitespace()
                .validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> Result<Self> {
        Self::from_source(&ProcessEnvironment, prefix)
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        merge_unique(&mut self.env_prefixes, other.env_prefixes);
        merge_unique(&mut self.system_property_prefixes, other.system_property_prefixes);
        merge_unique(&mut self.custom_domains, other.custom_domains);
        self.fail_if_not_set = other.fail_if_not_set;
        self.ignore_case = other.ignore_case;
        self.option_style = other.option_style;
        self
    }
}

fn merge_unique<T: PartialEq>(into: &mut Vec<T>, from: Vec<T>) {
    for item in from {
        if !into.contains(&item) {
            into.push(item);
        }
    }
}

/// Load configuration from a YAML file
pub fn load_yaml_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::Serialization(format!(
            "Failed to parse YAML config from {:?}: {}",
            path.as_ref(),
            e
        ))
    })
}

/// Load configuration from a JSON file
pub fn load_json_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    serde_json::from_str(&content).map_err(|e| {
        ConfigError::Serialization(format!(
            "Failed to parse JSON config from {:?}: {}",
            path.as_ref(),
            e
        ))
    })
}

/// Load configuration from a file, picking the format from the extension
pub fn load_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ConfigError::Invalid(format!("Unable to determine file extension for {:?}", path)))?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => load_yaml_config(path),
        "json" => load_json_config(path),
        _ => Err(ConfigError::Invalid(format!(
            "Unsupported config file extension: {}",
            extension
        ))),
    }
}
