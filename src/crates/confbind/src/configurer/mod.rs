//! Configurer capability: how option values reach live objects
//!
//! The engine never inspects targets itself. A target either exposes a
//! [`PropertyConfigurer`] natively, or one is looked up by the target's stable
//! type key in a [`ConfigurerResolver`]. Two resolver tiers exist, one for the
//! bootstrap phase and one for runtime; a [`BindingContext`] carries both plus
//! the phase the caller is in.
//!
//! # Example
//!
//! ```rust
//! use confbind::configurer::{coerce, Configurable, ConfigurerRegistry, TableConfigurer};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Seda {
//!     queue_size: i64,
//! }
//!
//! impl Configurable for Seda {
//!     fn type_key(&self) -> &str {
//!         "seda"
//!     }
//! }
//!
//! let configurer = TableConfigurer::<Seda>::new("seda").property(
//!     "queueSize",
//!     |t, v| {
//!         t.queue_size = coerce::to_i64(v)?;
//!         Ok(())
//!     },
//!     |t| Some(t.queue_size.into()),
//! );
//!
//! let mut registry = ConfigurerRegistry::new();
//! registry.register("seda", Arc::new(configurer));
//! assert!(registry.contains("seda"));
//! ```

pub mod coerce;
mod table;

pub use table::TableConfigurer;

use crate::error::BindingError;
use parking_lot::Mutex;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Upcast helper so configurers can downcast targets to their concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A live object that can receive options
pub trait Configurable: AsAny + Send {
    /// Stable identifier used to resolve a configurer when the target has none
    fn type_key(&self) -> &str;

    /// One-time initialisation, run before the configurer is requested.
    /// Must be idempotent: it is invoked on every binding and copy.
    fn init(&mut self) {}

    /// Configurer the target exposes itself, preferred over resolver lookup
    fn configurer(&self) -> Option<Arc<dyn PropertyConfigurer>> {
        None
    }

    /// Human readable description used in errors and logs
    fn describe(&self) -> String {
        self.type_key().to_string()
    }
}

/// Target handle shared between the aggregator output and the binder
pub type SharedTarget = Arc<Mutex<dyn Configurable>>;

/// Wrap a target into a [`SharedTarget`]
pub fn shared<T: Configurable>(target: T) -> SharedTarget {
    Arc::new(Mutex::new(target))
}

/// Sets named options on a target
pub trait PropertyConfigurer: Send + Sync {
    /// Apply `value` to the option `name` of `target`
    ///
    /// Returns `Ok(true)` when the option exists and was set, `Ok(false)` when
    /// the target has no such option, and an error when the value could not
    /// be converted to the option's type.
    fn configure(
        &self,
        target: &mut dyn Any,
        name: &str,
        value: &Value,
        ignore_case: bool,
    ) -> Result<bool, BindingError>;

    /// Extended introspection, when the configurer supports it
    fn getter(&self) -> Option<&dyn PropertyConfigurerGetter> {
        None
    }
}

/// Enumerates the current option values of a live target
pub trait PropertyConfigurerGetter: Send + Sync {
    /// Names of every option the target supports
    fn all_options(&self, target: &dyn Any) -> Vec<String>;

    /// Current value of an option, `None` when unset or unknown
    fn option_value(&self, target: &dyn Any, name: &str, ignore_case: bool) -> Option<Value>;
}

/// Looks up a configurer by a target's stable type key
pub trait ConfigurerResolver: Send + Sync {
    fn resolve(&self, type_key: &str) -> Option<Arc<dyn PropertyConfigurer>>;
}

/// Map-backed [`ConfigurerResolver`]
#[derive(Clone, Default)]
pub struct ConfigurerRegistry {
    configurers: HashMap<String, Arc<dyn PropertyConfigurer>>,
}

impl ConfigurerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a configurer, returning the one it replaced
    pub fn register(
        &mut self,
        type_key: impl Into<String>,
        configurer: Arc<dyn PropertyConfigurer>,
    ) -> Option<Arc<dyn PropertyConfigurer>> {
        self.configurers.insert(type_key.into(), configurer)
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, type_key: impl Into<String>, configurer: Arc<dyn PropertyConfigurer>) -> Self {
        self.register(type_key, configurer);
        self
    }

    pub fn contains(&self, type_key: &str) -> bool {
        self.configurers.contains_key(type_key)
    }

    pub fn len(&self) -> usize {
        self.configurers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurers.is_empty()
    }
}

impl ConfigurerResolver for ConfigurerRegistry {
    fn resolve(&self, type_key: &str) -> Option<Arc<dyn PropertyConfigurer>> {
        self.configurers.get(type_key).cloned()
    }
}

impl fmt::Debug for ConfigurerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.configurers.keys().collect();
        keys.sort();
        f.debug_struct("ConfigurerRegistry").field("keys", &keys).finish()
    }
}

/// Lifecycle stage selecting which resolver tier is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverPhase {
    #[default]
    Bootstrap,
    Runtime,
}

/// Resolver tiers plus the phase the caller is in
///
/// Using the wrong phase is a caller error; the context does not try to
/// recover by consulting the other tier.
#[derive(Clone)]
pub struct BindingContext {
    bootstrap: Arc<dyn ConfigurerResolver>,
    runtime: Arc<dyn ConfigurerResolver>,
    phase: ResolverPhase,
}

impl BindingContext {
    /// Create a context in the bootstrap phase
    pub fn new(bootstrap: Arc<dyn ConfigurerResolver>, runtime: Arc<dyn ConfigurerResolver>) -> Self {
        Self {
            bootstrap,
            runtime,
            phase: ResolverPhase::Bootstrap,
        }
    }

    /// Both tiers served by the same resolver
    pub fn single(resolver: Arc<dyn ConfigurerResolver>) -> Self {
        Self::new(resolver.clone(), resolver)
    }

    pub fn with_phase(mut self, phase: ResolverPhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn phase(&self) -> ResolverPhase {
        self.phase
    }

    /// Resolver for the current phase
    pub fn resolver(&self) -> &dyn ConfigurerResolver {
        match self.phase {
            ResolverPhase::Bootstrap => self.bootstrap.as_ref(),
            ResolverPhase::Runtime => self.runtime.as_ref(),
        }
    }

    /// Initialise the target and find its configurer
    ///
    /// The target's own configurer wins; otherwise the current tier is asked
    /// using the target's type key.
    pub fn resolve_configurer(&self, target: &mut dyn Configurable) -> Option<Arc<dyn PropertyConfigurer>> {
        target.init();
        target
            .configurer()
            .or_else(|| self.resolver().resolve(target.type_key()))
    }
}

impl fmt::Debug for BindingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingContext")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
