//! Table-driven configurer for a concrete target type
//!
//! Each property is a name plus a setter and a getter. This is the shape a
//! generated configurer takes, written out by hand.

use super::{Configurable, PropertyConfigurer, PropertyConfigurerGetter};
use crate::error::{BindingError, CoercionError};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

type Setter<T> = fn(&mut T, &Value) -> Result<(), CoercionError>;
type Getter<T> = fn(&T) -> Option<Value>;

struct PropertyEntry<T> {
    name: &'static str,
    set: Setter<T>,
    get: Getter<T>,
}

/// [`PropertyConfigurer`] with extended getter support for `T`
pub struct TableConfigurer<T> {
    target_name: String,
    properties: Vec<PropertyEntry<T>>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Configurable> TableConfigurer<T> {
    /// Create an empty table; `target_name` appears in binding errors
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            properties: Vec::new(),
            _target: PhantomData,
        }
    }

    /// Add a property with its setter and getter
    pub fn property(mut self, name: &'static str, set: Setter<T>, get: Getter<T>) -> Self {
        self.properties.push(PropertyEntry { name, set, get });
        self
    }

    /// Names of all properties, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|p| p.name)
    }

    fn find(&self, name: &str, ignore_case: bool) -> Option<&PropertyEntry<T>> {
        self.properties.iter().find(|p| {
            if ignore_case {
                p.name.eq_ignore_ascii_case(name)
            } else {
                p.name == name
            }
        })
    }
}

impl<T: Configurable> PropertyConfigurer for TableConfigurer<T> {
    fn configure(
        &self,
        target: &mut dyn Any,
        name: &str,
        value: &Value,
        ignore_case: bool,
    ) -> Result<bool, BindingError> {
        let Some(target) = target.downcast_mut::<T>() else {
            return Ok(false);
        };
        let Some(entry) = self.find(name, ignore_case) else {
            return Ok(false);
        };

        (entry.set)(target, value).map_err(|e| {
            BindingError::coercion(self.target_name.clone(), entry.name, e.value.clone(), &e)
        })?;
        Ok(true)
    }

    fn getter(&self) -> Option<&dyn PropertyConfigurerGetter> {
        Some(self)
    }
}

impl<T: Configurable> PropertyConfigurerGetter for TableConfigurer<T> {
    fn all_options(&self, target: &dyn Any) -> Vec<String> {
        if target.downcast_ref::<T>().is_none() {
            return Vec::new();
        }
        self.names().map(str::to_string).collect()
    }

    fn option_value(&self, target: &dyn Any, name: &str, ignore_case: bool) -> Option<Value> {
        let target = target.downcast_ref::<T>()?;
        self.find(name, ignore_case).and_then(|p| (p.get)(target))
    }
}

impl<T> fmt::Debug for TableConfigurer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.properties.iter().map(|p| p.name).collect();
        f.debug_struct("TableConfigurer")
            .field("target", &self.target_name)
            .field("properties", &names)
            .finish()
    }
}
