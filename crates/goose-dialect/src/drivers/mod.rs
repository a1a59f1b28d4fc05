//! Database driver implementations.
//!
//! - [`postgres`]: PostgreSQL
//! - [`mysql`]: MySQL/MariaDB
//! - [`clickhouse`]: ClickHouse
//!
//! # Architecture
//!
//! Each driver module implements `Dialect`, the version table statements for
//! its engine, and where a Rust client exists, `VersionConnection` for that
//! client.
//!
//! # Static dispatch
//!
//! [`DialectImpl`] wraps the builtin dialects in an enum and forwards each
//! trait method with a `match`, so name lookup needs no boxing.
//!
//! # Adding New Databases
//!
//! 1. Create a new module under `drivers/` (e.g., `drivers/sqlite/`)
//! 2. Implement the `Dialect` trait
//! 3. Add an enum variant to `DialectImpl` and a name in [`DialectImpl::from_name`]
//! 4. Register it in `DialectCatalog::with_builtins()`

pub mod clickhouse;
pub mod mysql;
pub mod postgres;

pub use clickhouse::ClickHouseDialect;
pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;

use crate::core::traits::Dialect;

/// Enum-based static dispatch over the builtin dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectImpl {
    Postgres(PostgresDialect),
    Mysql(MysqlDialect),
    ClickHouse(ClickHouseDialect),
}

impl Dialect for DialectImpl {
    fn name(&self) -> &str {
        match self {
            DialectImpl::Postgres(d) => d.name(),
            DialectImpl::Mysql(d) => d.name(),
            DialectImpl::ClickHouse(d) => d.name(),
        }
    }

    fn create_version_table_sql(&self) -> &'static str {
        match self {
            DialectImpl::Postgres(d) => d.create_version_table_sql(),
            DialectImpl::Mysql(d) => d.create_version_table_sql(),
            DialectImpl::ClickHouse(d) => d.create_version_table_sql(),
        }
    }

    fn insert_version_sql(&self) -> &'static str {
        match self {
            DialectImpl::Postgres(d) => d.insert_version_sql(),
            DialectImpl::Mysql(d) => d.insert_version_sql(),
            DialectImpl::ClickHouse(d) => d.insert_version_sql(),
        }
    }

    fn version_history_sql(&self) -> &'static str {
        match self {
            DialectImpl::Postgres(d) => d.version_history_sql(),
            DialectImpl::Mysql(d) => d.version_history_sql(),
            DialectImpl::ClickHouse(d) => d.version_history_sql(),
        }
    }
}

impl DialectImpl {
    /// Names accepted by [`DialectImpl::from_name`].
    pub const NAMES: [&'static str; 3] = ["postgres", "mysql", "clickhouse"];

    /// Look up a builtin dialect by engine name.
    ///
    /// Matching is exact and case-sensitive. Unknown names return `None` so the
    /// caller can fall back to a dialect of its own.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "postgres" => Some(DialectImpl::Postgres(PostgresDialect::new())),
            "mysql" => Some(DialectImpl::Mysql(MysqlDialect::new())),
            "clickhouse" => Some(DialectImpl::ClickHouse(ClickHouseDialect::new())),
            _ => None,
        }
    }
}

/// Resolve a dialect by engine name. See [`DialectImpl::from_name`].
pub fn dialect_by_name(name: &str) -> Option<DialectImpl> {
    DialectImpl::from_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_by_name_known() {
        for name in DialectImpl::NAMES {
            let dialect = dialect_by_name(name).unwrap();
            assert_eq!(dialect.name(), name);
        }
    }

    #[test]
    fn test_dialect_by_name_unknown() {
        assert!(dialect_by_name("sqlite3").is_none());
        assert!(dialect_by_name("").is_none());
        assert!(dialect_by_name("mymysql").is_none());
        assert!(dialect_by_name("postgresql").is_none());
    }

    #[test]
    fn test_dialect_by_name_is_case_sensitive() {
        assert!(dialect_by_name("Postgres").is_none());
        assert!(dialect_by_name("MYSQL").is_none());
        assert!(dialect_by_name("ClickHouse").is_none());
        assert!(dialect_by_name(" postgres").is_none());
    }

    #[test]
    fn test_dialect_by_name_idempotent() {
        for name in DialectImpl::NAMES {
            let a = dialect_by_name(name).unwrap();
            let b = dialect_by_name(name).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.create_version_table_sql(), b.create_version_table_sql());
            assert_eq!(a.insert_version_sql(), b.insert_version_sql());
            assert_eq!(a.version_history_sql(), b.version_history_sql());
        }
    }

    #[test]
    fn test_dialect_impl_dispatch() {
        let dialect = DialectImpl::Postgres(PostgresDialect::new());
        assert_eq!(dialect.insert_version_sql(), PostgresDialect.insert_version_sql());

        let dialect = DialectImpl::ClickHouse(ClickHouseDialect::new());
        assert!(dialect.version_history_sql().contains("tstamp DESC"));
    }

    #[test]
    fn test_every_dialect_names_version_table() {
        for name in DialectImpl::NAMES {
            let dialect = dialect_by_name(name).unwrap();
            let ddl = dialect.create_version_table_sql();
            assert!(!ddl.trim().is_empty());
            assert!(ddl.contains("goose_db_version"));
            assert!(ddl.contains("version_id"));
            assert!(ddl.contains("is_applied"));
            assert!(dialect.insert_version_sql().contains("goose_db_version"));
            assert!(dialect.version_history_sql().contains("goose_db_version"));
        }
    }

    #[test]
    fn test_dialects_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<DialectImpl>();
        assert_send_sync::<PostgresDialect>();
        assert_send_sync::<MysqlDialect>();
        assert_send_sync::<ClickHouseDialect>();
    }
}
