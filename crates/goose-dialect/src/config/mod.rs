//! Configuration loading and validation.
//!
//! Reads a `dbconf.yml` whose top-level keys are environment names:
//!
//! ```yaml
//! development:
//!     driver: postgres
//!     open: user=liam dbname=tester sslmode=disable
//!
//! production:
//!     driver: postgres
//!     open: $DATABASE_URL
//!
//! customdriver:
//!     driver: customdriver
//!     open: customdriver open
//!     dialect: mysql
//! ```

mod types;
mod validation;

pub use types::*;
pub use validation::expand_env_vars;

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::core::{Dialect, DialectCatalog};
use crate::error::{DialectError, Result};

impl DbConf {
    /// Load the `env` environment from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P, env: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content, env)
    }

    /// Parse the `env` environment from a YAML string.
    pub fn from_yaml(yaml: &str, env: &str) -> Result<Self> {
        let mut environments: Environments = serde_yaml::from_str(yaml)?;

        let mut driver = environments.remove(env).ok_or_else(|| {
            DialectError::Config(format!(
                "environment '{}' not found (available: {})",
                env,
                environments.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })?;
        driver.open = expand_env_vars(&driver.open);

        let conf = DbConf {
            env: env.to_string(),
            driver,
        };
        conf.validate()?;

        debug!(
            env = %conf.env,
            driver = %conf.driver.driver,
            dialect = conf.driver.dialect_name().unwrap_or_default(),
            "Loaded database configuration"
        );
        Ok(conf)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Resolve this environment's dialect through `catalog`.
    ///
    /// An explicit `dialect` wins over the one implied by the driver name, so
    /// callers can point a custom driver at a dialect they registered.
    pub fn resolve_dialect(&self, catalog: &DialectCatalog) -> Result<Arc<dyn Dialect>> {
        let name = self.driver.dialect_name().ok_or_else(|| {
            DialectError::Config(format!(
                "driver '{}' has no builtin dialect",
                self.driver.driver
            ))
        })?;
        catalog.require_dialect(name)
    }
}
