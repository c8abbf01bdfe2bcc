//! Common test fixtures: two components with table configurers

#![allow(dead_code)]

use confbind::configurer::coerce;
use confbind::{
    BindingContext, Configurable, ConfigurerRegistry, EnvironmentPropertySource, SystemProperties,
    TableConfigurer,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default, Clone)]
pub struct SedaComponent {
    pub queue_size: i64,
    pub concurrent_consumers: i64,
    pub block_when_full: bool,
}

impl Configurable for SedaComponent {
    fn type_key(&self) -> &str {
        "seda"
    }

    fn describe(&self) -> String {
        "SedaComponent".to_string()
    }
}

#[derive(Debug, Default, Clone)]
pub struct SimpleLanguage {
    pub trim: bool,
}

impl Configurable for SimpleLanguage {
    fn type_key(&self) -> &str {
        "simple"
    }
}

pub fn seda_configurer() -> TableConfigurer<SedaComponent> {
    TableConfigurer::<SedaComponent>::new("SedaComponent")
        .property(
            "queueSize",
            |t, v| {
                t.queue_size = coerce::to_i64(v)?;
                Ok(())
            },
            |t| Some(t.queue_size.into()),
        )
        .property(
            "concurrentConsumers",
            |t, v| {
                t.concurrent_consumers = coerce::to_i64(v)?;
                Ok(())
            },
            |t| Some(t.concurrent_consumers.into()),
        )
        .property(
            "blockWhenFull",
            |t, v| {
                t.block_when_full = coerce::to_bool(v)?;
                Ok(())
            },
            |t| Some(Value::Bool(t.block_when_full)),
        )
}

pub fn simple_configurer() -> TableConfigurer<SimpleLanguage> {
    TableConfigurer::<SimpleLanguage>::new("SimpleLanguage").property(
        "trim",
        |t, v| {
            t.trim = coerce::to_bool(v)?;
            Ok(())
        },
        |t| Some(Value::Bool(t.trim)),
    )
}

/// Context whose both tiers know `seda` and `simple`
pub fn binding_context() -> BindingContext {
    let registry = ConfigurerRegistry::new()
        .with("seda", Arc::new(seda_configurer()))
        .with("simple", Arc::new(simple_configurer()));
    BindingContext::single(Arc::new(registry))
}

/// Property source over fixed environment variables and system properties
pub fn property_source(env: &[(&str, &str)], system: &[(&str, &str)]) -> EnvironmentPropertySource {
    let env: BTreeMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let system: SystemProperties = system.iter().copied().collect();
    EnvironmentPropertySource::new(Arc::new(env), Arc::new(system))
}
