//! PostgreSQL SQL dialect (Strategy pattern).
//!
//! Numbered `$n` placeholders and a `serial` surrogate key, so history is
//! ordered by insertion sequence.

use crate::core::traits::Dialect;

/// PostgreSQL dialect implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Create a new PostgreSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn create_version_table_sql(&self) -> &'static str {
        "CREATE TABLE goose_db_version (
    id serial NOT NULL,
    version_id bigint NOT NULL,
    is_applied boolean NOT NULL,
    tstamp timestamp NULL default now(),
    PRIMARY KEY(id)
);"
    }

    fn insert_version_sql(&self) -> &'static str {
        // PostgreSQL uses $1, $2, etc. (1-based)
        "INSERT INTO goose_db_version (version_id, is_applied) VALUES ($1, $2);"
    }

    fn version_history_sql(&self) -> &'static str {
        "SELECT version_id, is_applied from goose_db_version ORDER BY id DESC"
    }
}
