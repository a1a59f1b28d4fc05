//! Core traits for migration version tracking.
//!
//! - [`Dialect`]: SQL statements for one database engine's version table
//! - [`VersionConnection`]: the caller's open connection, as seen by a dialect
//!
//! # Design Patterns
//!
//! - **Strategy**: each engine provides its own [`Dialect`]
//! - **Template Method**: [`Dialect::query_version_history`] is a default method
//!   built on [`Dialect::version_history_sql`]

use async_trait::async_trait;
use tracing::debug;

use crate::error::{BoxError, DialectError, Result};

use super::record::VersionRecord;

/// Name of the version tracking table shared by every dialect.
pub const VERSION_TABLE: &str = "goose_db_version";

/// SQL syntax strategy for the version tracking table.
///
/// Dialects are stateless. Every method returns the same literal text on every
/// call, so a single instance may be shared between any number of tasks.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// Get the dialect name (e.g., "postgres", "mysql").
    fn name(&self) -> &str;

    /// DDL that creates the `goose_db_version` table.
    ///
    /// The statement is returned, not executed.
    fn create_version_table_sql(&self) -> &'static str;

    /// INSERT template for one version record.
    ///
    /// Contains exactly two placeholders, bound in order as
    /// `(version_id, is_applied)`.
    fn insert_version_sql(&self) -> &'static str;

    /// SELECT returning `(version_id, is_applied)` rows, most recent first.
    fn version_history_sql(&self) -> &'static str;

    /// Read the version history through `conn`, most recent first.
    ///
    /// Any failure of the query is reported as [`DialectError::TableMissing`],
    /// with the connection error attached as its source.
    async fn query_version_history(
        &self,
        conn: &dyn VersionConnection,
    ) -> Result<Vec<VersionRecord>> {
        conn.query_versions(self.version_history_sql())
            .await
            .map_err(|e| {
                debug!(
                    dialect = self.name(),
                    error = %e,
                    "Version history query failed, assuming {} is missing",
                    VERSION_TABLE
                );
                DialectError::TableMissing(e)
            })
    }
}

/// An open database connection supplied by the caller.
///
/// Connection setup, pooling, timeouts and teardown all belong to the
/// implementation; dialects only issue statements through it.
#[async_trait]
pub trait VersionConnection: Send + Sync {
    /// Run `sql` and decode each row as `(version_id, is_applied)`.
    async fn query_versions(&self, sql: &str) -> std::result::Result<Vec<VersionRecord>, BoxError>;

    /// Run a statement without parameters (DDL).
    async fn execute(&self, sql: &str) -> std::result::Result<(), BoxError>;

    /// Run a two-placeholder insert, binding `version_id` then `is_applied`.
    async fn insert_version(
        &self,
        sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError>;

    /// Create the version table and insert its first record.
    ///
    /// The default runs the two statements one after the other. Engines with
    /// transactional DDL override this to make the pair atomic.
    async fn initialize_version_table(
        &self,
        create_sql: &str,
        insert_sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError> {
        self.execute(create_sql).await?;
        self.insert_version(insert_sql, version_id, is_applied).await
    }
}
