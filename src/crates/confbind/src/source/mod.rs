//! Prefix scans over the environment and system properties
//!
//! Every scan is a full synchronous snapshot of its source. Results go into an
//! insertion-ordered [`Properties`] table; when two prefixes produce the same
//! key, the later prefix wins.

mod vars;

pub use vars::{ProcessEnvironment, SystemProperties, VariableSource};

use crate::naming::to_env_var;
use crate::properties::Properties;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Scans the environment and system properties for configuration keys
#[derive(Clone)]
pub struct EnvironmentPropertySource {
    env: Arc<dyn VariableSource>,
    system: Arc<dyn VariableSource>,
}

impl EnvironmentPropertySource {
    /// Read from the given sources
    pub fn new(env: Arc<dyn VariableSource>, system: Arc<dyn VariableSource>) -> Self {
        Self { env, system }
    }

    /// Real process environment plus the given system properties
    pub fn from_process(system: SystemProperties) -> Self {
        Self::new(Arc::new(ProcessEnvironment), Arc::new(system))
    }

    /// Environment variables matching any prefix, as lowercase dotted keys
    ///
    /// Each prefix is uppercased with non-word characters turned into `-`; a
    /// variable matches if its uppercased name starts with that form or with
    /// its `_` variant. `CAMEL_COMPONENT_SEDA_QUEUE_SIZE` becomes
    /// `camel.component.seda.queue.size`.
    pub fn load_environment_variables_as_properties(&self, prefixes: &[&str]) -> Properties {
        let mut answer = Properties::new();
        if prefixes.is_empty() {
            return answer;
        }

        let variables = self.env.variables();
        for prefix in prefixes {
            let (dashed, underscored) = prefix_variants(prefix, '_');
            for (k, v) in &variables {
                let upper = k.to_uppercase();
                if upper.starts_with(&dashed) || upper.starts_with(&underscored) {
                    let key = upper.to_lowercase().replace('_', ".");
                    trace!(env = %k, key = %key, "Environment variable matched prefix");
                    answer.insert(key, v.clone());
                }
            }
        }

        debug!(count = answer.len(), "Loaded environment variables as properties");
        answer
    }

    /// System properties matching any prefix, keys kept as they are
    ///
    /// Matching uses the uppercased key against the dash form of the prefix
    /// and its `.` variant.
    pub fn load_system_properties_as_properties(&self, prefixes: &[&str]) -> Properties {
        let mut answer = Properties::new();
        if prefixes.is_empty() {
            return answer;
        }

        let variables = self.system.variables();
        for prefix in prefixes {
            let (dashed, dotted) = prefix_variants(prefix, '.');
            for (k, v) in &variables {
                let upper = k.to_uppercase();
                if upper.starts_with(&dashed) || upper.starts_with(&dotted) {
                    answer.insert(k.clone(), v.clone());
                }
            }
        }

        debug!(count = answer.len(), "Loaded system properties as properties");
        answer
    }

    /// Raw environment entries whose uppercased key starts with any prefix
    ///
    /// Keys are returned uppercased and untouched otherwise; this is the input
    /// of the domain mappers.
    pub fn filter_env_variables(&self, prefixes: &[&str]) -> BTreeMap<String, String> {
        let mut answer = BTreeMap::new();
        for (k, v) in self.env.variables() {
            let upper = k.to_uppercase();
            if prefixes.iter().any(|p| upper.starts_with(p)) {
                answer.insert(upper, v);
            }
        }
        answer
    }

    /// System property `name`, else environment variable `to_env_var(name)`
    pub fn lookup_property_from_sys_or_env(&self, name: &str) -> Option<String> {
        self.system
            .get(name)
            .or_else(|| self.env.get(&to_env_var(name)))
    }
}

impl Default for EnvironmentPropertySource {
    fn default() -> Self {
        Self::from_process(SystemProperties::new())
    }
}

impl std::fmt::Debug for EnvironmentPropertySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentPropertySource").finish_non_exhaustive()
    }
}

fn prefix_variants(prefix: &str, separator: char) -> (String, String) {
    let dashed: String = prefix
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
        .collect();
    let other = dashed.replace('-', &separator.to_string());
    (dashed, other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(env: &[(&str, &str)], system: &[(&str, &str)]) -> EnvironmentPropertySource {
        let env: BTreeMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let system: SystemProperties = system.iter().copied().collect();
        EnvironmentPropertySource::new(Arc::new(env), Arc::new(system))
    }

    #[test]
    fn test_prefix_variants() {
        assert_eq!(
            prefix_variants("camel.component.", '_'),
            ("CAMEL-COMPONENT-".to_string(), "CAMEL_COMPONENT_".to_string())
        );
        assert_eq!(
            prefix_variants("camel.main", '.'),
            ("CAMEL-MAIN".to_string(), "CAMEL.MAIN".to_string())
        );
    }

    #[test]
    fn test_load_env_as_properties() {
        let src = source(
            &[
                ("CAMEL_COMPONENT_SEDA_QUEUE_SIZE", "100"),
                ("camel_main_name", "demo"),
                ("PATH", "/usr/bin"),
            ],
            &[],
        );
        let props = src.load_environment_variables_as_properties(&["camel."]);
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("camel.component.seda.queue.size"), Some("100"));
        assert_eq!(props.get("camel.main.name"), Some("demo"));
        assert!(props.keys().all(|k| !k.contains('_') && k == k.to_lowercase()));
    }

    #[test]
    fn test_load_env_empty_prefixes() {
        let src = source(&[("CAMEL_X", "1")], &[]);
        assert!(src.load_environment_variables_as_properties(&[]).is_empty());
    }

    #[test]
    fn test_load_env_overlapping_prefixes_last_write_wins() {
        let src = source(&[("CAMEL_MAIN_NAME", "demo")], &[]);
        let props = src.load_environment_variables_as_properties(&["camel.", "camel.main."]);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("camel.main.name"), Some("demo"));
    }

    #[test]
    fn test_load_system_properties() {
        let src = source(
            &[],
            &[
                ("camel.component.seda.queueSize", "5"),
                ("CAMEL.MAIN.NAME", "x"),
                ("user.home", "/root"),
            ],
        );
        let props = src.load_system_properties_as_properties(&["camel."]);
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("camel.component.seda.queueSize"), Some("5"));
        assert_eq!(props.get("CAMEL.MAIN.NAME"), Some("x"));
    }

    #[test]
    fn test_filter_env_variables() {
        let src = source(
            &[
                ("CAMEL_COMPONENT_SEDA_QUEUE_SIZE", "100"),
                ("camel_language_simple_trim", "true"),
                ("HOME", "/root"),
            ],
            &[],
        );
        let raw = src.filter_env_variables(&["CAMEL_COMPONENT_", "CAMEL_LANGUAGE_"]);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw["CAMEL_COMPONENT_SEDA_QUEUE_SIZE"], "100");
        assert_eq!(raw["CAMEL_LANGUAGE_SIMPLE_TRIM"], "true");
    }

    #[test]
    fn test_lookup_property_from_sys_or_env() {
        let src = source(
            &[("CAMEL_MAIN_NAME", "from-env"), ("CAMEL_MAIN_DURATION", "10")],
            &[("camel.main.name", "from-sys")],
        );
        assert_eq!(
            src.lookup_property_from_sys_or_env("camel.main.name").as_deref(),
            Some("from-sys")
        );
        assert_eq!(
            src.lookup_property_from_sys_or_env("camel.main.duration").as_deref(),
            Some("10")
        );
        assert_eq!(src.lookup_property_from_sys_or_env("camel.main.other"), None);
    }
}
