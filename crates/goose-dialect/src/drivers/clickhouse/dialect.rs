//! ClickHouse SQL dialect (Strategy pattern).
//!
//! MergeTree gives no retrieval order by insertion, and the table has no
//! surrogate key, so history is sorted by `version_id` and then `tstamp`.

use crate::core::traits::Dialect;

/// ClickHouse dialect implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickHouseDialect;

impl ClickHouseDialect {
    /// Create a new ClickHouse dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for ClickHouseDialect {
    fn name(&self) -> &str {
        "clickhouse"
    }

    fn create_version_table_sql(&self) -> &'static str {
        // Legacy MergeTree(date_column, primary_key, index_granularity) syntax,
        // partitioned by `date`.
        "CREATE TABLE goose_db_version (
    version_id Int64,
    is_applied UInt8,
    date       Date     default today(),
    tstamp     DateTime default now()
) Engine = MergeTree(date, (date), 8192)"
    }

    fn insert_version_sql(&self) -> &'static str {
        "INSERT INTO goose_db_version (version_id, is_applied) VALUES (?, ?)"
    }

    fn version_history_sql(&self) -> &'static str {
        "SELECT version_id, is_applied FROM goose_db_version ORDER BY version_id DESC, tstamp DESC"
    }
}
