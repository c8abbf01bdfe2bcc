//! Grouping canonical properties into per-target option bags
//!
//! For a key prefix such as `camel.component.` every key
//! `camel.component.<name>.<option>` is routed to the targets the caller
//! resolves for `<name>`, after the enablement flags have been consulted:
//!
//! ```text
//! camel.component.enabled      = false   # group switch, default true
//! camel.component.seda.enabled = true    # per-name switch, wins over the group
//! ```
//!
//! Here only `seda` options are aggregated.

use crate::configurer::SharedTarget;
use crate::error::AggregationError;
use crate::naming::option_key;
use crate::properties::{OptionBags, Properties, PropertyOptionKey};
use crate::validation::ensure_option_and_value;
use tracing::trace;

const ENABLED: &str = "enabled";
const RESERVED_NAMES: [&str; 2] = [ENABLED, "properties"];

/// Route one canonical key into the option bags of its targets
///
/// Keys outside `key_prefix`, reserved names, disabled names and the
/// `enabled` option itself are ignored. An option that is empty once
/// camel-cased, or an empty value, is an error for the key. `resolver` is only asked for targets once
/// the key has passed validation.
pub fn compute_properties<F, I>(
    key_prefix: &str,
    key: &str,
    table: &Properties,
    out: &mut OptionBags,
    mut resolver: F,
) -> Result<(), AggregationError>
where
    F: FnMut(&str) -> I,
    I: IntoIterator<Item = SharedTarget>,
{
    let Some(rest) = key.strip_prefix(key_prefix) else {
        return Ok(());
    };

    let (name, option) = match rest.split_once('.') {
        Some((name, option)) => (name, option),
        None => (rest, ""),
    };

    if RESERVED_NAMES.contains(&name) {
        return Ok(());
    }
    if !is_service_enabled(key_prefix, name, table) {
        trace!(key, name, "Skipping option of disabled service");
        return Ok(());
    }
    if option.eq_ignore_ascii_case(ENABLED) {
        return Ok(());
    }

    let value = table.get_or(key, "");
    let option = option_key(option);
    validate_option_and_value(key, &option, value)?;

    let bag_prefix = format!("{}{}.", key_prefix, name);
    for target in resolver(name) {
        out.entry(PropertyOptionKey::new(target, bag_prefix.clone()))
            .or_default()
            .insert(option.clone(), value)?;
    }
    Ok(())
}

/// Aggregate every key of `table` under `key_prefix`, stopping at the first invalid key
pub fn compute_all<F, I>(
    key_prefix: &str,
    table: &Properties,
    out: &mut OptionBags,
    mut resolver: F,
) -> Result<(), AggregationError>
where
    F: FnMut(&str) -> I,
    I: IntoIterator<Item = SharedTarget>,
{
    for key in table.keys() {
        compute_properties(key_prefix, key, table, out, &mut resolver)?;
    }
    Ok(())
}

/// Whether options for `name` under `prefix` should be applied
///
/// `<prefix><name>.enabled` wins over `<prefix>enabled`, which defaults to
/// `true`. Only the text `true` (any case) counts as enabled.
pub fn is_service_enabled(prefix: &str, name: &str, table: &Properties) -> bool {
    let prefix = if prefix.ends_with('.') {
        prefix.to_string()
    } else {
        format!("{}.", prefix)
    };

    let group = table.get_or(&format!("{}{}", prefix, ENABLED), "true");
    let item = table.get_or(&format!("{}{}.{}", prefix, name, ENABLED), group);
    item.eq_ignore_ascii_case("true")
}

/// Reject an empty option segment or an empty value for `key`
pub fn validate_option_and_value(key: &str, option: &str, value: &str) -> Result<(), AggregationError> {
    ensure_option_and_value(key, option, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurer::{shared, Configurable};
    use std::sync::Arc;

    struct Service(&'static str);

    impl Configurable for Service {
        fn type_key(&self) -> &str {
            self.0
        }
    }

    fn table(entries: &[(&str, &str)]) -> Properties {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_basic_grouping() {
        let seda = shared(Service("seda"));
        let props = table(&[
            ("camel.component.seda.queue-size", "100"),
            ("camel.component.seda.concurrent-consumers", "2"),
        ]);
        let mut out = OptionBags::new();

        compute_all("camel.component.", &props, &mut out, |name| {
            assert_eq!(name, "seda");
            vec![seda.clone()]
        })
        .unwrap();

        let key = PropertyOptionKey::new(seda, "camel.component.seda.");
        let bag = &out[&key];
        assert_eq!(bag.get("queueSize"), Some("100"));
        assert_eq!(bag.get("concurrentConsumers"), Some("2"));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_enablement_precedence() {
        let seda = shared(Service("seda"));
        let jms = shared(Service("jms"));
        let props = table(&[
            ("camel.component.enabled", "false"),
            ("camel.component.seda.enabled", "true"),
            ("camel.component.seda.x", "1"),
            ("camel.component.jms.y", "2"),
        ]);
        let mut out = OptionBags::new();

        compute_all("camel.component.", &props, &mut out, |name| match name {
            "seda" => vec![seda.clone()],
            "jms" => vec![jms.clone()],
            _ => vec![],
        })
        .unwrap();

        assert_eq!(out.len(), 1);
        let bag = &out[&PropertyOptionKey::new(seda, "camel.component.seda.")];
        assert_eq!(bag.get("x"), Some("1"));
        assert!(!bag.contains("enabled"));
    }

    #[test]
    fn test_item_disabled_under_enabled_group() {
        let jms = shared(Service("jms"));
        let props = table(&[
            ("camel.component.enabled", "true"),
            ("camel.component.jms.enabled", "false"),
            ("camel.component.jms.y", "2"),
        ]);
        let mut out = OptionBags::new();

        compute_all("camel.component.", &props, &mut out, |_| vec![jms.clone()]).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_is_service_enabled() {
        let props = table(&[
            ("camel.component.enabled", "false"),
            ("camel.component.seda.enabled", "TRUE"),
            ("camel.component.kafka.enabled", "yes"),
        ]);
        assert!(is_service_enabled("camel.component", "seda", &props));
        assert!(!is_service_enabled("camel.component.", "jms", &props));
        assert!(!is_service_enabled("camel.component.", "kafka", &props));
        assert!(is_service_enabled("camel.language.", "simple", &props));

        let props = table(&[
            ("camel.component.enabled", "true"),
            ("camel.component.jms.enabled", "false"),
        ]);
        assert!(!is_service_enabled("camel.component.", "jms", &props));
        assert!(is_service_enabled("camel.component.", "seda", &props));
    }

    #[test]
    fn test_option_empty_after_camel_case_reports_key() {
        let seda = shared(Service("seda"));
        let key = "camel.component.seda.-";
        let props = table(&[(key, "1")]);

        let mut out = OptionBags::new();
        let err = compute_properties("camel.component.", key, &props, &mut out, |_| vec![seda.clone()])
            .unwrap_err();
        assert_eq!(err, AggregationError::EmptyOption { key: key.to_string() });
        assert!(out.is_empty());

        let err = compute_properties("camel.component.", key, &props, &mut out, |_| {
            Vec::<SharedTarget>::new()
        })
        .unwrap_err();
        assert_eq!(err, AggregationError::EmptyOption { key: key.to_string() });
    }

    #[test]
    fn test_reserved_names_skipped() {
        let props = table(&[
            ("camel.component.enabled", "true"),
            ("camel.component.properties.location", "classpath:x"),
        ]);
        let mut out = OptionBags::new();
        compute_all("camel.component.", &props, &mut out, |_| -> Vec<SharedTarget> {
            panic!("resolver must not be called for reserved names")
        })
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_empty_option_and_value() {
        for prefix in ["camel.component.", "camel.dataformat.", "camel.language."] {
            let mut out = OptionBags::new();

            let key = format!("{}thing", prefix);
            let props = table(&[(key.as_str(), "1")]);
            let err = compute_properties(prefix, &key, &props, &mut out, |_| Vec::<SharedTarget>::new())
                .unwrap_err();
            assert_eq!(err, AggregationError::EmptyOption { key: key.clone() });

            let key = format!("{}thing.", prefix);
            let props = table(&[(key.as_str(), "1")]);
            assert!(matches!(
                compute_properties(prefix, &key, &props, &mut out, |_| Vec::<SharedTarget>::new()),
                Err(AggregationError::EmptyOption { .. })
            ));

            let key = format!("{}thing.opt", prefix);
            let props = table(&[(key.as_str(), "")]);
            let err = compute_properties(prefix, &key, &props, &mut out, |_| Vec::<SharedTarget>::new())
                .unwrap_err();
            assert_eq!(err, AggregationError::EmptyValue { key });
        }
    }

    #[test]
    fn test_key_outside_prefix_ignored() {
        let props = table(&[("camel.main.name", "demo")]);
        let mut out = OptionBags::new();
        compute_properties("camel.component.", "camel.main.name", &props, &mut out, |_| {
            Vec::<SharedTarget>::new()
        })
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_multiple_targets_get_separate_bags() {
        let a = shared(Service("seda"));
        let b = shared(Service("seda"));
        let props = table(&[("camel.component.seda.size", "3")]);
        let mut out = OptionBags::new();

        compute_all("camel.component.", &props, &mut out, |_| vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(out.len(), 2);
        assert!(out.keys().any(|k| Arc::ptr_eq(k.target(), &a)));
        assert!(out.keys().any(|k| Arc::ptr_eq(k.target(), &b)));
    }
}
