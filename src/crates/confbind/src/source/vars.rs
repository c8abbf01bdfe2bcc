//! Key/value sources: the process environment and in-process system properties

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::trace;

/// Snapshot-able source of string variables
pub trait VariableSource: Send + Sync {
    /// Every variable at the time of the call
    fn variables(&self) -> Vec<(String, String)>;

    /// Single lookup by exact key
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment
///
/// Entries whose key or value is not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl VariableSource for ProcessEnvironment {
    fn variables(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                (Ok(k), Ok(v)) => Some((k, v)),
                (k, _) => {
                    trace!(key = ?k, "Skipping environment variable that is not valid UTF-8");
                    None
                }
            })
            .collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Process-scoped property store, set programmatically rather than inherited
///
/// Cloning yields another handle to the same store.
#[derive(Debug, Clone, Default)]
pub struct SystemProperties {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl SystemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the previous value
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.write().insert(key.into(), value.into())
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SystemProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let props = SystemProperties::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

impl VariableSource for SystemProperties {
    fn variables(&self) -> Vec<(String, String)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).cloned()
    }
}

impl VariableSource for BTreeMap<String, String> {
    fn variables(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl VariableSource for HashMap<String, String> {
    fn variables(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
