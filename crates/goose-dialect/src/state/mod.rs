//! Version table bookkeeping on top of a dialect and a connection.
//!
//! [`VersionStore`] pairs a [`Dialect`] with the caller's
//! [`VersionConnection`] and runs the dialect's statements through it. Rows
//! are only ever appended: a rollback is recorded as a new row with
//! `is_applied = false`.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::core::{Dialect, VersionConnection, VersionRecord, VERSION_TABLE};
use crate::error::{DialectError, Result};

/// Version table access for one dialect over one connection.
///
/// # Example
///
/// ```rust,ignore
/// let dialect = dialect_by_name("postgres").unwrap();
/// let store = VersionStore::new(&dialect, &client);
///
/// let current = store.ensure_db_version().await?;
/// store.record_version(20240101120000, true).await?;
/// ```
pub struct VersionStore<'a> {
    dialect: &'a dyn Dialect,
    conn: &'a dyn VersionConnection,
}

impl<'a> VersionStore<'a> {
    /// Create a store over a borrowed dialect and connection.
    pub fn new(dialect: &'a dyn Dialect, conn: &'a dyn VersionConnection) -> Self {
        Self { dialect, conn }
    }

    /// The dialect statements are taken from.
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect
    }

    /// Read the version history, most recent first.
    ///
    /// Fails with [`DialectError::TableMissing`] when the query fails.
    pub async fn history(&self) -> Result<Vec<VersionRecord>> {
        self.dialect.query_version_history(self.conn).await
    }

    /// Create the version table and record version 0 as applied.
    pub async fn create_version_table(&self) -> Result<()> {
        info!(
            dialect = self.dialect.name(),
            "Creating version table {}", VERSION_TABLE
        );

        self.conn
            .initialize_version_table(
                self.dialect.create_version_table_sql(),
                self.dialect.insert_version_sql(),
                0,
                true,
            )
            .await
            .map_err(|e| DialectError::database(e, "creating version table"))
    }

    /// Append a version record.
    pub async fn record_version(&self, version_id: i64, is_applied: bool) -> Result<()> {
        debug!(
            dialect = self.dialect.name(),
            version_id, is_applied, "Recording version"
        );

        self.conn
            .insert_version(self.dialect.insert_version_sql(), version_id, is_applied)
            .await
            .map_err(|e| DialectError::database(e, format!("recording version {}", version_id)))
    }

    /// Return the current version, creating the version table if needed.
    ///
    /// A failed history query is taken to mean the table does not exist yet:
    /// the table is created and 0 is returned. If the failure had another
    /// cause, the CREATE TABLE fails too and that error is returned.
    ///
    /// An existing but empty table (an earlier initialization whose first
    /// insert did not land) gets its initial record and 0 is returned.
    pub async fn ensure_db_version(&self) -> Result<i64> {
        match self.history().await {
            Ok(history) if history.is_empty() => {
                warn!(
                    dialect = self.dialect.name(),
                    "Version table {} is empty, recording initial version", VERSION_TABLE
                );
                self.record_version(0, true).await?;
                Ok(0)
            }
            Ok(history) => current_version(&history).ok_or(DialectError::NoAppliedVersion),
            Err(DialectError::TableMissing(cause)) => {
                info!(
                    dialect = self.dialect.name(),
                    cause = %cause,
                    "Version history unavailable"
                );
                self.create_version_table().await?;
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }
}

/// Current version from a most-recent-first history.
///
/// The latest row for each version decides its state. The first version whose
/// latest row is applied is current; versions whose latest row is a rollback
/// are skipped. Returns `None` if no version is applied.
pub fn current_version(history: &[VersionRecord]) -> Option<i64> {
    let mut rolled_back = HashSet::new();

    for record in history {
        if rolled_back.contains(&record.version_id) {
            continue;
        }
        if record.is_applied {
            return Some(record.version_id);
        }
        rolled_back.insert(record.version_id);
    }

    None
}
