//! MySQL/MariaDB SQL dialect (Strategy pattern).
//!
//! Unnumbered `?` placeholders. The table DDL is the same text PostgreSQL
//! uses; MySQL reads `serial`, `boolean` and `timestamp ... default now()`
//! through its type aliases.

use crate::core::traits::Dialect;

/// MySQL/MariaDB dialect implementation.
///
/// Compatible with MySQL 5.7+, 8.0+, and MariaDB 10.2+.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Create a new MySQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn create_version_table_sql(&self) -> &'static str {
        // Kept byte-compatible with tables created by earlier releases.
        "CREATE TABLE goose_db_version (
    id serial NOT NULL,
    version_id bigint NOT NULL,
    is_applied boolean NOT NULL,
    tstamp timestamp NULL default now(),
    PRIMARY KEY(id)
);"
    }

    fn insert_version_sql(&self) -> &'static str {
        "INSERT INTO goose_db_version (version_id, is_applied) VALUES (?, ?);"
    }

    fn version_history_sql(&self) -> &'static str {
        "SELECT version_id, is_applied from goose_db_version ORDER BY id DESC"
    }
}
