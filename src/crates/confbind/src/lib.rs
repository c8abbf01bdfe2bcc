//! Configuration discovery and property binding for pluggable components
//!
//! Options for components, data formats and languages are discovered in the
//! process environment and in system properties, mapped onto the canonical
//! `camel.<domain>.<name>.<option>` namespace, grouped per live target and
//! bound onto those targets through a configurer capability.
//!
//! # Option style
//!
//! Mapped environment options are dotted by default:
//! `CAMEL_COMPONENT_SEDA_QUEUE_SIZE` becomes `camel.component.seda.queue.size`,
//! and the configurer is asked for `queue.size`. Flat configurers such as
//! [`TableConfigurer`] know `queueSize`, so strict binding of environment
//! options onto them needs [`OptionStyle::Dashed`]. That style produces
//! `queue-size`, which aggregation camel-cases to `queueSize`. Set it through
//! [`EngineConfig::option_style`] or `CONFBIND_OPTION_STYLE=dashed`.
//!
//! # Modules
//!
//! - `naming` - Key-format conversions between canonical keys and environment variables
//! - `registry` - Registered component, data format and language identifiers
//! - `source` - Prefix scans over the environment and system properties
//! - `mapper` - Raw environment keys to canonical keys
//! - `aggregate` - Grouping canonical keys into per-target option bags
//! - `binder` - Applying option bags to targets, with an audit record
//! - `copier` - Copying set options between configured objects
//! - `configurer` - The configurer capability and value coercion
//! - `properties` - Ordered property tables and option bags
//! - `config` - Engine settings from defaults, environment and files
//! - `error` - Error types and chain formatting
//! - `logging` - Scoped log guards and secret redaction
//! - `validation` - Fluent validation API
//!
//! # Example
//!
//! ```rust
//! use confbind::mapper::map_all;
//! use confbind::{EnvNameCatalog, OptionStyle, Properties};
//! use std::collections::BTreeMap;
//!
//! let catalog = EnvNameCatalog::builtin();
//! let mut env = BTreeMap::from([(
//!     "CAMEL_COMPONENT_SEDA_QUEUE_SIZE".to_string(),
//!     "100".to_string(),
//! )]);
//! let mut properties = Properties::new();
//!
//! map_all(&catalog, &mut env, &mut properties, false, OptionStyle::Dotted);
//!
//! assert_eq!(properties.get("camel.component.seda.queue.size"), Some("100"));
//! assert!(env.is_empty());
//! ```

pub mod aggregate;
pub mod binder;
pub mod config;
pub mod configurer;
pub mod copier;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod naming;
pub mod properties;
pub mod registry;
pub mod source;
pub mod validation;

pub use binder::{AuditRecord, BindOutcome, PropertyBinder};
pub use config::{ConfigBuilder, EngineConfig};
pub use configurer::{
    shared, BindingContext, Configurable, ConfigurerRegistry, ConfigurerResolver,
    PropertyConfigurer, PropertyConfigurerGetter, ResolverPhase, SharedTarget, TableConfigurer,
};
pub use error::{AggregationError, BindingError, BindingErrorKind, CoercionError, ConfigError, Result};
pub use mapper::{DomainOptionMapper, OptionStyle};
pub use properties::{OptionBags, OptionsBag, Properties, PropertyOptionKey};
pub use registry::{CatalogPhase, Domain, EnvNameCatalog, NameRegistry};
pub use source::{EnvironmentPropertySource, ProcessEnvironment, SystemProperties, VariableSource};

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
