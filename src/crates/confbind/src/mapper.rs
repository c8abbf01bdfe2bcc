//! Raw environment keys to canonical `camel.<domain>.<name>.<option>` keys
//!
//! A key like `CAMEL_COMPONENT_AHC_WS_MAX_SIZE` is ambiguous on its own: the
//! target could be `ahc` or `ahc-ws`. Outside custom mode the registered
//! identifiers decide, longest first. In custom mode the first segment after
//! the domain prefix is taken as the name.
//!
//! Mapped keys are removed from the input map; anything that does not match
//! stays there for the next mapper or for the caller to inspect.

use crate::properties::Properties;
use crate::registry::{Domain, EnvNameCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// How the raw option remainder is rendered into the canonical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionStyle {
    /// `QUEUE_SIZE` becomes `queue.size`
    #[default]
    Dotted,
    /// `QUEUE_SIZE` becomes `queue-size`, which the aggregator turns into `queueSize`
    Dashed,
}

impl OptionStyle {
    fn separator(self) -> char {
        match self {
            Self::Dotted => '.',
            Self::Dashed => '-',
        }
    }

    /// Render a raw option remainder
    pub fn render(self, raw: &str) -> String {
        raw.to_lowercase().replace('_', &self.separator().to_string())
    }
}

impl FromStr for OptionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dotted" => Ok(Self::Dotted),
            "dashed" => Ok(Self::Dashed),
            other => Err(format!("unknown option style: {}", other)),
        }
    }
}

/// Maps one domain's raw environment entries into canonical properties
#[derive(Debug, Clone, Copy)]
pub struct DomainOptionMapper {
    domain: Domain,
    style: OptionStyle,
}

impl DomainOptionMapper {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            style: OptionStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OptionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Move every mappable entry of `env` into `properties`
    ///
    /// Returns the number of keys mapped. Never fails: keys that cannot be
    /// mapped are left in `env`.
    pub fn map(
        &self,
        catalog: &EnvNameCatalog,
        env: &mut BTreeMap<String, String>,
        properties: &mut Properties,
        custom: bool,
    ) -> usize {
        let mut mapped = Vec::new();

        for (key, value) in env.iter() {
            let canonical = if custom {
                self.map_custom(key)
            } else {
                self.map_registered(catalog, key)
            };

            match canonical {
                Some(canonical) => {
                    trace!(env = %key, key = %canonical, "Mapped environment variable");
                    properties.insert(canonical, value.clone());
                    mapped.push(key.clone());
                }
                None => trace!(env = %key, domain = %self.domain, "Environment variable left unmapped"),
            }
        }

        for key in &mapped {
            env.remove(key);
        }

        if !mapped.is_empty() {
            debug!(
                domain = %self.domain,
                count = mapped.len(),
                custom,
                "Mapped environment variables to options"
            );
        }
        mapped.len()
    }

    fn map_registered(&self, catalog: &EnvNameCatalog, key: &str) -> Option<String> {
        let found = catalog.longest_match(self.domain, key)?;
        Some(format!(
            "{}{}.{}",
            self.domain.key_prefix(),
            found.name,
            self.style.render(found.option)
        ))
    }

    fn map_custom(&self, key: &str) -> Option<String> {
        let rest = key.strip_prefix(self.domain.env_prefix())?;
        match rest.split_once('_') {
            Some((name, option)) if !name.is_empty() && !option.is_empty() => Some(format!(
                "{}{}.{}",
                self.domain.key_prefix(),
                name.to_lowercase(),
                self.style.render(option)
            )),
            _ => {
                warn!(env = %key, domain = %self.domain, "Custom environment variable has no option segment");
                None
            }
        }
    }
}

/// Run the component, data format and language mappers in that order
pub fn map_all(
    catalog: &EnvNameCatalog,
    env: &mut BTreeMap<String, String>,
    properties: &mut Properties,
    custom: bool,
    style: OptionStyle,
) -> usize {
    Domain::ALL
        .iter()
        .map(|&domain| {
            DomainOptionMapper::new(domain)
                .with_style(style)
                .map(catalog, env, properties, custom)
        })
        .sum()
}
