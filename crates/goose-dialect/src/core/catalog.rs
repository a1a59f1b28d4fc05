//! Dialect catalog for explicit dependency injection.
//!
//! [`DialectCatalog`] is a registry of dialects keyed by name. It starts from
//! the builtin engines and lets callers register their own dialects, so a
//! driver this crate does not know about can still be tracked.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DialectError, Result};

use super::traits::Dialect;

/// Registry of dialects by name.
///
/// # Example
///
/// ```rust,ignore
/// let mut catalog = DialectCatalog::with_builtins();
/// catalog.register_dialect("cockroach", PostgresDialect::new());
///
/// let dialect = catalog.require_dialect("cockroach")?;
/// let history = dialect.query_version_history(&client).await?;
/// ```
#[derive(Default, Clone)]
pub struct DialectCatalog {
    dialects: HashMap<String, Arc<dyn Dialect>>,
}

impl DialectCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the builtin dialects registered under their
    /// canonical names.
    pub fn with_builtins() -> Self {
        use crate::drivers::{ClickHouseDialect, MysqlDialect, PostgresDialect};

        let mut catalog = Self::new();
        catalog.register_dialect("postgres", PostgresDialect::new());
        catalog.register_dialect("mysql", MysqlDialect::new());
        catalog.register_dialect("clickhouse", ClickHouseDialect::new());
        catalog
    }

    /// Register a dialect by name, replacing any previous registration.
    pub fn register_dialect(&mut self, name: impl Into<String>, dialect: impl Dialect + 'static) {
        self.dialects.insert(name.into(), Arc::new(dialect));
    }

    /// Register a dialect as an Arc (for sharing).
    pub fn register_dialect_arc(&mut self, name: impl Into<String>, dialect: Arc<dyn Dialect>) {
        self.dialects.insert(name.into(), dialect);
    }

    /// Get a dialect by name.
    pub fn get_dialect(&self, name: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects.get(name).cloned()
    }

    /// Get a dialect by name, returning an error if not found.
    pub fn require_dialect(&self, name: &str) -> Result<Arc<dyn Dialect>> {
        self.get_dialect(name)
            .ok_or_else(|| DialectError::UnknownDialect(name.to_string()))
    }

    /// Check if a dialect is registered.
    pub fn has_dialect(&self, name: &str) -> bool {
        self.dialects.contains_key(name)
    }

    /// Get all registered dialect names, sorted.
    pub fn dialect_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for DialectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectCatalog")
            .field("dialects", &self.dialect_names())
            .finish()
    }
}
