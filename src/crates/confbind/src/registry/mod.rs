//! Registered component, data format and language identifiers
//!
//! Identifiers are stored in environment form (`CAMEL_COMPONENT_AHC_WS`) and
//! only used to recognise which part of a raw environment key names the
//! target and which part is the option. The [`EnvNameCatalog`] owns one
//! registry per [`Domain`] for the bootstrap window; once
//! [`bootstrap_done`](EnvNameCatalog::bootstrap_done) is called it moves to the
//! runtime phase for good and every lookup misses.
//!
//! When several identifiers are prefixes of the same key, the longest one
//! wins, and a match must end on a `_` boundary with a non-empty remainder.

pub mod catalog;

use crate::naming::to_env_var;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Category of pluggable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Component,
    DataFormat,
    Language,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Component, Domain::DataFormat, Domain::Language];

    /// Canonical namespace segment
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::DataFormat => "dataformat",
            Self::Language => "language",
        }
    }

    /// Raw environment prefix, e.g. `CAMEL_COMPONENT_`
    pub const fn env_prefix(self) -> &'static str {
        match self {
            Self::Component => "CAMEL_COMPONENT_",
            Self::DataFormat => "CAMEL_DATAFORMAT_",
            Self::Language => "CAMEL_LANGUAGE_",
        }
    }

    /// Canonical key prefix, e.g. `camel.component.`
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Self::Component => "camel.component.",
            Self::DataFormat => "camel.dataformat.",
            Self::Language => "camel.language.",
        }
    }

    /// Identifiers shipped with the crate
    pub fn builtin_names(self) -> &'static [&'static str] {
        match self {
            Self::Component => catalog::COMPONENT_ENV_NAMES,
            Self::DataFormat => catalog::DATAFORMAT_ENV_NAMES,
            Self::Language => catalog::LANGUAGE_ENV_NAMES,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "dataformat" => Ok(Self::DataFormat),
            "language" => Ok(Self::Language),
            other => Err(format!("unknown domain: {}", other)),
        }
    }
}

/// A registered identifier recognised at the start of a raw key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMatch<'a> {
    /// Identifier as registered, e.g. `CAMEL_COMPONENT_AHC_WS`
    pub identifier: &'a str,
    /// Canonical target name, e.g. `ahc-ws`
    pub name: String,
    /// Raw remainder after the identifier and its separator, e.g. `MAX_SIZE`
    pub option: &'a str,
}

#[derive(Debug, Clone)]
struct Entry {
    env_form: String,
    identifier: String,
}

/// Sorted identifier set for one domain
#[derive(Debug, Clone)]
pub struct NameRegistry {
    domain: Domain,
    names: BTreeSet<String>,
    // longest env form first, ties broken by identifier
    by_length: Vec<Entry>,
}

impl NameRegistry {
    /// Build a registry from identifiers in environment form
    pub fn new<I, S>(domain: Domain, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let mut by_length: Vec<Entry> = names
            .iter()
            .map(|id| Entry {
                env_form: to_env_var(id),
                identifier: id.clone(),
            })
            .collect();
        by_length.sort_by(|a, b| {
            b.env_form
                .len()
                .cmp(&a.env_form.len())
                .then_with(|| a.identifier.cmp(&b.identifier))
        });

        Self {
            domain,
            names,
            by_length,
        }
    }

    /// Registry populated from the shipped catalog
    pub fn builtin(domain: Domain) -> Self {
        Self::new(domain, domain.builtin_names().iter().copied())
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.names.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Identifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Longest registered identifier that prefixes `key` on a `_` boundary
    pub fn longest_match<'a>(&'a self, key: &'a str) -> Option<RegistryMatch<'a>> {
        self.by_length.iter().find_map(|entry| {
            let rest = key.strip_prefix(entry.env_form.as_str())?;
            let option = rest.strip_prefix('_')?;
            if option.is_empty() {
                return None;
            }
            Some(RegistryMatch {
                identifier: entry.identifier.as_str(),
                name: self.canonical_name(&entry.identifier),
                option,
            })
        })
    }

    /// `CAMEL_COMPONENT_AHC_WS` -> `ahc-ws`
    pub fn canonical_name(&self, identifier: &str) -> String {
        let bare = identifier
            .strip_prefix(self.domain.env_prefix())
            .unwrap_or(identifier);
        bare.to_lowercase().replace('_', "-")
    }
}

/// Lifecycle marker for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Bootstrap,
    Runtime,
}

/// Per-domain registries for the bootstrap window
#[derive(Debug, Clone)]
pub struct EnvNameCatalog {
    registries: Option<[NameRegistry; 3]>,
}

impl EnvNameCatalog {
    /// Catalog with the shipped identifier lists
    pub fn builtin() -> Self {
        Self::from_registries(
            NameRegistry::builtin(Domain::Component),
            NameRegistry::builtin(Domain::DataFormat),
            NameRegistry::builtin(Domain::Language),
        )
    }

    pub fn from_registries(
        components: NameRegistry,
        dataformats: NameRegistry,
        languages: NameRegistry,
    ) -> Self {
        Self {
            registries: Some([components, dataformats, languages]),
        }
    }

    pub fn phase(&self) -> CatalogPhase {
        if self.registries.is_some() {
            CatalogPhase::Bootstrap
        } else {
            CatalogPhase::Runtime
        }
    }

    /// Registry for a domain, `None` once bootstrap is done
    pub fn registry(&self, domain: Domain) -> Option<&NameRegistry> {
        let registries = self.registries.as_ref()?;
        let idx = match domain {
            Domain::Component => 0,
            Domain::DataFormat => 1,
            Domain::Language => 2,
        };
        Some(&registries[idx])
    }

    /// Match a raw key against a domain's registry
    pub fn longest_match<'a>(&'a self, domain: Domain, key: &'a str) -> Option<RegistryMatch<'a>> {
        self.registry(domain)?.longest_match(key)
    }

    /// Drop the registries and switch to the runtime phase; cannot be undone
    pub fn bootstrap_done(&mut self) {
        if self.registries.take().is_some() {
            tracing::debug!("Bootstrap done, environment name registries released");
        }
    }
}

impl Default for EnvNameCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
