//! Applying option bags to live targets
//!
//! The binder resolves a configurer for the target, offers it every entry of
//! the bag and removes the entries it accepted. Each applied entry is written
//! to the caller's [`AuditRecord`] under its fully qualified key.
//!
//! Strictness is controlled by `fail_if_not_set`:
//!
//! | situation              | strict                  | lenient                       |
//! |------------------------|-------------------------|-------------------------------|
//! | no configurer          | `Err(NoConfigurer)`     | `Ok(Skipped)`                 |
//! | unknown option         | `Err(UnknownProperty)`  | entry stays in the bag        |
//! | value not convertible  | `Err(Coercion)`         | `Ok(Failed { .. })`           |
//!
//! Binding stops at the first error in both modes.

use crate::configurer::{BindingContext, Configurable};
use crate::error::{format_error_chain, join_key, BindingError};
use crate::logging::{mask_if_sensitive, LogGuard};
use crate::properties::{OptionBags, OptionsBag, Properties};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// Result of binding one bag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// Binding ran; `n` entries were applied (possibly zero)
    Applied(usize),
    /// No configurer was available and the binder was lenient
    Skipped,
    /// Lenient binding hit an error after `applied` entries
    Failed { applied: usize, error: BindingError },
}

impl BindOutcome {
    /// Whether at least one entry was applied
    pub fn applied(&self) -> bool {
        self.applied_count() > 0
    }

    pub fn applied_count(&self) -> usize {
        match self {
            Self::Applied(n) => *n,
            Self::Skipped => 0,
            Self::Failed { applied, .. } => *applied,
        }
    }
}

/// Fully qualified keys and values applied during a binding session
///
/// Append-only. Values are kept as given, so the record must not be logged
/// as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditRecord {
    entries: Properties,
}

impl AuditRecord {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were applied
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    /// Serialize to a JSON object, keys in application order
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Binds option bags onto targets
#[derive(Debug, Clone, Copy)]
pub struct PropertyBinder<'a> {
    ctx: &'a BindingContext,
    fail_if_not_set: bool,
    ignore_case: bool,
}

impl<'a> PropertyBinder<'a> {
    /// Strict, case-insensitive binder
    pub fn new(ctx: &'a BindingContext) -> Self {
        Self {
            ctx,
            fail_if_not_set: true,
            ignore_case: true,
        }
    }

    pub fn fail_if_not_set(mut self, fail: bool) -> Self {
        self.fail_if_not_set = fail;
        self
    }

    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Apply `bag` to `target`, removing the entries that were applied
    ///
    /// `prefix` is the key prefix the bag was collected under; it is used for
    /// audit keys and to enrich errors.
    pub fn bind(
        &self,
        target: &mut dyn Configurable,
        bag: &mut OptionsBag,
        prefix: Option<&str>,
        audit: &mut AuditRecord,
    ) -> Result<BindOutcome, BindingError> {
        let description = target.describe();
        let _guard = LogGuard::new(format!("bind {}", description));

        let Some(configurer) = self.ctx.resolve_configurer(target) else {
            let error = BindingError::no_configurer(description);
            if self.fail_if_not_set {
                return Err(error.enrich(prefix));
            }
            debug!(bean = %error.target, "No configurer found, skipping target");
            return Ok(BindOutcome::Skipped);
        };

        let mut applied = 0;
        for (name, value) in bag.entries() {
            let raw = Value::String(value.clone());
            let error = match configurer.configure(target.as_any_mut(), &name, &raw, self.ignore_case) {
                Ok(true) => {
                    bag.remove(&name);
                    let key = join_key(prefix.unwrap_or_default(), &name);
                    debug!(
                        "Configured property: {}={} on bean: {}",
                        key,
                        mask_if_sensitive(&name, &value),
                        description
                    );
                    audit.record(key, value);
                    applied += 1;
                    continue;
                }
                Ok(false) if !self.fail_if_not_set => {
                    trace!(option = %name, bean = %description, "Option not supported by target");
                    continue;
                }
                Ok(false) => BindingError::unknown_property(description.clone(), name, value),
                Err(error) => error,
            };

            let error = error.enrich(prefix);
            if self.fail_if_not_set {
                return Err(error);
            }
            debug!(
                key = %error.resolved_key(),
                error = %format_error_chain(&error),
                "Error configuring property, ignored as fail_if_not_set is false"
            );
            return Ok(BindOutcome::Failed { applied, error });
        }

        Ok(BindOutcome::Applied(applied))
    }

    /// Bind every bag onto its target, locking one target at a time
    ///
    /// Strict mode stops at the first error. Bags are visited in no
    /// particular order.
    pub fn bind_all(
        &self,
        bags: &mut OptionBags,
        audit: &mut AuditRecord,
    ) -> Result<Vec<BindOutcome>, BindingError> {
        let mut outcomes = Vec::with_capacity(bags.len());
        for (key, bag) in bags.iter_mut() {
            let mut guard = key.target().lock();
            let target: &mut dyn Configurable = &mut *guard;
            outcomes.push(self.bind(target, bag, Some(key.prefix()), audit)?);
        }
        Ok(outcomes)
    }
}

/// Apply one bag to one target
pub fn bind(
    ctx: &BindingContext,
    target: &mut dyn Configurable,
    bag: &mut OptionsBag,
    prefix: Option<&str>,
    fail_if_not_set: bool,
    ignore_case: bool,
    audit: &mut AuditRecord,
) -> Result<BindOutcome, BindingError> {
    PropertyBinder::new(ctx)
        .fail_if_not_set(fail_if_not_set)
        .ignore_case(ignore_case)
        .bind(target, bag, prefix, audit)
}

/// Apply every aggregated bag to its target
pub fn bind_all(
    ctx: &BindingContext,
    bags: &mut OptionBags,
    fail_if_not_set: bool,
    ignore_case: bool,
    audit: &mut AuditRecord,
) -> Result<Vec<BindOutcome>, BindingError> {
    PropertyBinder::new(ctx)
        .fail_if_not_set(fail_if_not_set)
        .ignore_case(ignore_case)
        .bind_all(bags, audit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurer::{coerce, shared, ConfigurerRegistry, TableConfigurer};
    use crate::error::BindingErrorKind;
    use crate::properties::PropertyOptionKey;
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct Seda {
        queue_size: i64,
        block_when_full: bool,
        password: Option<String>,
    }

    impl Configurable for Seda {
        fn type_key(&self) -> &str {
            "seda"
        }

        fn describe(&self) -> String {
            "SedaComponent".to_string()
        }
    }

    struct Opaque;

    impl Configurable for Opaque {
        fn type_key(&self) -> &str {
            "opaque"
        }
    }

    fn context() -> BindingContext {
        let configurer = TableConfigurer::<Seda>::new("SedaComponent")
            .property(
                "queueSize",
                |t, v| {
                    t.queue_size = coerce::to_i64(v)?;
                    Ok(())
                },
                |t| Some(t.queue_size.into()),
            )
            .property(
                "blockWhenFull",
                |t, v| {
                    t.block_when_full = coerce::to_bool(v)?;
                    Ok(())
                },
                |t| Some(t.block_when_full.into()),
            )
            .property(
                "password",
                |t, v| {
                    t.password = Some(coerce::to_text(v));
                    Ok(())
                },
                |t| t.password.clone().map(Value::String),
            );
        BindingContext::single(Arc::new(ConfigurerRegistry::new().with("seda", Arc::new(configurer))))
    }

    fn bag(entries: &[(&str, &str)]) -> OptionsBag {
        let mut bag = OptionsBag::new();
        for (k, v) in entries {
            bag.insert(*k, *v).unwrap();
        }
        bag
    }

    #[test]
    fn test_bind_applies_and_audits() {
        let ctx = context();
        let mut seda = Seda::default();
        let mut options = bag(&[("queueSize", "100"), ("blockwhenfull", "true"), ("password", "s3cret")]);
        let mut audit = AuditRecord::new();

        let outcome = bind(&ctx, &mut seda, &mut options, Some("camel.component.seda."), true, true, &mut audit)
            .unwrap();

        assert_eq!(outcome, BindOutcome::Applied(3));
        assert!(outcome.applied());
        assert!(options.is_empty());
        assert_eq!(seda.queue_size, 100);
        assert!(seda.block_when_full);
        assert_eq!(
            audit.keys().collect::<Vec<_>>(),
            vec![
                "camel.component.seda.queueSize",
                "camel.component.seda.blockwhenfull",
                "camel.component.seda.password"
            ]
        );
        assert_eq!(audit.get("camel.component.seda.password"), Some("s3cret"));
    }

    #[test]
    fn test_audit_key_without_trailing_dot() {
        let ctx = context();
        let mut seda = Seda::default();
        let mut options = bag(&[("queueSize", "5")]);
        let mut audit = AuditRecord::new();

        bind(&ctx, &mut seda, &mut options, Some("camel.component.seda"), true, true, &mut audit).unwrap();

        assert_eq!(audit.get("camel.component.seda.queueSize"), Some("5"));
        assert_eq!(audit.to_json().unwrap(), r#"{"camel.component.seda.queueSize":"5"}"#);
    }

    #[test]
    fn test_strict_unknown_property_carries_prefix() {
        let ctx = context();
        let mut seda = Seda::default();
        let mut options = bag(&[("bogus", "1")]);
        let mut audit = AuditRecord::new();

        let err = bind(&ctx, &mut seda, &mut options, Some("camel.component.seda."), true, true, &mut audit)
            .unwrap_err();

        assert_eq!(err.kind, BindingErrorKind::UnknownProperty);
        assert_eq!(err.property, "bogus");
        assert_eq!(err.target, "SedaComponent");
        assert_eq!(err.option_key.as_deref(), Some("camel.component.seda.bogus"));
        assert!(audit.is_empty());
    }

    #[test]
    fn test_lenient_unknown_property_stays_in_bag() {
        let ctx = context();
        let mut seda = Seda::default();
        let mut options = bag(&[("bogus", "1"), ("queueSize", "7")]);
        let mut audit = AuditRecord::new();

        let outcome = bind(&ctx, &mut seda, &mut options, None, false, true, &mut audit).unwrap();

        assert_eq!(outcome, BindOutcome::Applied(1));
        assert_eq!(options.get("bogus"), Some("1"));
        assert_eq!(audit.keys().collect::<Vec<_>>(), vec!["queueSize"]);
    }

    #[test]
    fn test_case_sensitive_binding() {
        let ctx = context();
        let mut seda = Seda::default();
        let mut options = bag(&[("queuesize", "1")]);
        let mut audit = AuditRecord::new();

        let outcome = bind(&ctx, &mut seda, &mut options, None, false, false, &mut audit).unwrap();

        assert_eq!(outcome, BindOutcome::Applied(0));
        assert!(!outcome.applied());
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_coercion_failure_strict_and_lenient() {
        let ctx = context();
        let mut audit = AuditRecord::new();

        let mut seda = Seda::default();
        let mut options = bag(&[("queueSize", "3"), ("blockWhenFull", "maybe")]);
        let err = bind(&ctx, &mut seda, &mut options, Some("camel.component.seda."), true, true, &mut audit)
            .unwrap_err();
        assert!(matches!(err.kind, BindingErrorKind::Coercion(_)));
        assert_eq!(err.value.as_deref(), Some("maybe"));

        let mut audit = AuditRecord::new();
        let mut seda = Seda::default();
        let mut options = bag(&[("queueSize", "3"), ("blockWhenFull", "maybe")]);
        let outcome = bind(&ctx, &mut seda, &mut options, Some("camel.component.seda."), false, true, &mut audit)
            .unwrap();
        match outcome {
            BindOutcome::Failed { applied, error } => {
                assert_eq!(applied, 1);
                assert_eq!(error.option_key.as_deref(), Some("camel.component.seda.blockWhenFull"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(audit.len(), 1);
        assert_eq!(options.get("blockWhenFull"), Some("maybe"));
    }

    #[test]
    fn test_no_configurer() {
        let ctx = context();
        let mut audit = AuditRecord::new();

        let mut options = bag(&[("x", "1")]);
        let err = bind(&ctx, &mut Opaque, &mut options, None, true, true, &mut audit).unwrap_err();
        assert_eq!(err.kind, BindingErrorKind::NoConfigurer);

        let outcome = bind(&ctx, &mut Opaque, &mut options, None, false, true, &mut audit).unwrap();
        assert_eq!(outcome, BindOutcome::Skipped);
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_bind_all_locks_each_target() {
        let ctx = context();
        let first = shared(Seda::default());
        let second = shared(Seda::default());

        let mut bags = OptionBags::new();
        bags.insert(
            PropertyOptionKey::new(first.clone(), "camel.component.seda."),
            bag(&[("queueSize", "1")]),
        );
        bags.insert(
            PropertyOptionKey::new(second.clone(), "camel.component.seda2."),
            bag(&[("queueSize", "2")]),
        );
        let mut audit = AuditRecord::new();

        let outcomes = bind_all(&ctx, &mut bags, true, true, &mut audit).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(bags.values().all(OptionsBag::is_empty));
        assert_eq!(audit.get("camel.component.seda.queueSize"), Some("1"));
        assert_eq!(audit.get("camel.component.seda2.queueSize"), Some("2"));

        let guard = first.lock();
        let target: &dyn Configurable = &*guard;
        assert_eq!(target.as_any().downcast_ref::<Seda>().unwrap().queue_size, 1);
    }
}
