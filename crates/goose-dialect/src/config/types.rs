//! Configuration type definitions.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One environment's database settings, as written in `dbconf.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverConfig {
    /// Driver name (e.g., "postgres", "mysql", "clickhouse").
    pub driver: String,

    /// Driver-specific open string. `$VAR` and `${VAR}` are expanded on load.
    pub open: String,

    /// Dialect override, for drivers that do not imply one.
    #[serde(default)]
    pub dialect: Option<String>,
}

impl DriverConfig {
    /// Builtin dialect implied by the driver name.
    pub fn implied_dialect(&self) -> Option<&'static str> {
        match self.driver.as_str() {
            "postgres" => Some("postgres"),
            "mysql" | "mymysql" => Some("mysql"),
            "clickhouse" => Some("clickhouse"),
            _ => None,
        }
    }

    /// Dialect name in effect: the explicit override, else the implied one.
    pub fn dialect_name(&self) -> Option<&str> {
        self.dialect.as_deref().or_else(|| self.implied_dialect())
    }
}

/// All environments in a `dbconf.yml`, keyed by environment name.
pub type Environments = BTreeMap<String, DriverConfig>;

/// Database configuration for a single selected environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConf {
    /// Selected environment name (e.g., "development").
    pub env: String,

    /// Driver settings for that environment.
    pub driver: DriverConfig,
}
