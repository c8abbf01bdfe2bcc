//! Configuration builder trait
//!
//! Provides a common shape for settings structures: validation, loading from
//! environment variables and merging several sources.

use crate::Result;

/// Trait for configuration structures that support building, validation, and merging
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    ///
    /// Returns an error if the configuration is invalid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables named `{PREFIX}{FIELD_NAME}`
    ///
    /// Variables that are not set keep their default value.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Merge another configuration into this one
    ///
    /// Scalar fields take the value from `other`, list fields gain the
    /// entries of `other` they do not already hold. Returns self for chaining.
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Defaults, validated
    fn build() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with the environment, validated
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::from_env(prefix)?);
        config.validate()?;
        Ok(config)
    }
}
