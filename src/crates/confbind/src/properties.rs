//! Ordered property tables and per-target option bags

use crate::configurer::SharedTarget;
use crate::error::AggregationError;
use crate::validation::ensure_option_and_value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Insertion-ordered string table
///
/// Re-inserting an existing key replaces its value in place, so the first
/// insertion decides the position and the last one the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    /// Value for `key`, or `default` when absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove a key, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Copy every entry of `other` into this table
    pub fn extend_from(&mut self, other: &Properties) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Identity of one option bag: a live target plus the key prefix it was found under
///
/// Targets compare by handle identity, not by value, so two distinct objects
/// of the same type get separate bags.
#[derive(Clone)]
pub struct PropertyOptionKey {
    target: SharedTarget,
    prefix: String,
}

impl PropertyOptionKey {
    pub fn new(target: SharedTarget, prefix: impl Into<String>) -> Self {
        Self {
            target,
            prefix: prefix.into(),
        }
    }

    pub fn target(&self) -> &SharedTarget {
        &self.target
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn target_addr(&self) -> *const () {
        Arc::as_ptr(&self.target) as *const ()
    }
}

impl PartialEq for PropertyOptionKey {
    fn eq(&self, other: &Self) -> bool {
        self.target_addr() == other.target_addr() && self.prefix == other.prefix
    }
}

impl Eq for PropertyOptionKey {}

impl Hash for PropertyOptionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target_addr().hash(state);
        self.prefix.hash(state);
    }
}

impl fmt::Debug for PropertyOptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyOptionKey")
            .field("target", &self.target_addr())
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Insertion-ordered option name to value mapping for one target
///
/// Empty names and empty values are rejected on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsBag {
    options: Properties,
}

impl OptionsBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, failing on an empty name or value
    pub fn insert(
        &mut self,
        option: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, AggregationError> {
        let option = option.into();
        let value = value.into();
        ensure_option_and_value(&option, &option, &value)?;
        Ok(self.options.insert(option, value))
    }

    pub fn get(&self, option: &str) -> Option<&str> {
        self.options.get(option)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    /// Remove an option once it has been applied
    pub fn remove(&mut self, option: &str) -> Option<String> {
        self.options.remove(option)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter()
    }

    /// Snapshot of the entries, used to iterate while removing
    pub fn entries(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }
}

/// Aggregation output: one bag per target and prefix
pub type OptionBags = HashMap<PropertyOptionKey, OptionsBag>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurer::{shared, Configurable};

    struct Dummy;

    impl Configurable for Dummy {
        fn type_key(&self) -> &str {
            "dummy"
        }
    }

    #[test]
    fn test_properties_preserve_insertion_order() {
        let mut props = Properties::new();
        props.insert("b", "1");
        props.insert("a", "2");
        props.insert("c", "3");
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_properties_overwrite_keeps_position() {
        let mut props = Properties::new();
        props.insert("x", "1");
        props.insert("y", "2");
        assert_eq!(props.insert("x", "3"), Some("1".to_string()));
        assert_eq!(props.iter().collect::<Vec<_>>(), vec![("x", "3"), ("y", "2")]);
    }

    #[test]
    fn test_properties_remove_reindexes() {
        let mut props: Properties = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(props.remove("a"), Some("1".to_string()));
        assert_eq!(props.get("c"), Some("3"));
        assert_eq!(props.remove("missing"), None);
        props.insert("d", "4");
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert_eq!(props.get_or("zz", "fallback"), "fallback");
    }

    #[test]
    fn test_properties_serialize_in_order() {
        let props: Properties = [("z", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(serde_json::to_string(&props).unwrap(), r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn test_options_bag_rejects_empty() {
        let mut bag = OptionsBag::new();
        assert!(bag.insert("", "1").is_err());
        assert!(bag.insert("queueSize", "").is_err());
        assert!(bag.is_empty());
        assert_eq!(bag.insert("queueSize", "10").unwrap(), None);
        assert_eq!(bag.get("queueSize"), Some("10"));
    }

    #[test]
    fn test_option_key_identity() {
        let a = shared(Dummy);
        let b = shared(Dummy);

        let mut bags = OptionBags::new();
        bags.entry(PropertyOptionKey::new(a.clone(), "camel.component.dummy."))
            .or_default()
            .insert("x", "1")
            .unwrap();
        bags.entry(PropertyOptionKey::new(a.clone(), "camel.component.dummy."))
            .or_default()
            .insert("y", "2")
            .unwrap();
        bags.entry(PropertyOptionKey::new(b, "camel.component.dummy."))
            .or_default()
            .insert("x", "3")
            .unwrap();

        assert_eq!(bags.len(), 2);
        let key = PropertyOptionKey::new(a, "camel.component.dummy.");
        assert_eq!(bags[&key].len(), 2);
    }
}
