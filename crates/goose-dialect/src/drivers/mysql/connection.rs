//! [`VersionConnection`] for mysql_async pools connected to MySQL.
//!
//! Inserts go through `exec_drop`, which uses server-side prepared statements.

use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::Pool;

use crate::core::{VersionConnection, VersionRecord};
use crate::error::BoxError;

#[async_trait]
impl VersionConnection for Pool {
    async fn query_versions(&self, sql: &str) -> std::result::Result<Vec<VersionRecord>, BoxError> {
        let mut conn = self.get_conn().await?;
        let rows: Vec<(i64, bool)> = conn.query(sql).await?;
        Ok(rows.into_iter().map(VersionRecord::from).collect())
    }

    async fn execute(&self, sql: &str) -> std::result::Result<(), BoxError> {
        let mut conn = self.get_conn().await?;
        conn.query_drop(sql).await?;
        Ok(())
    }

    async fn insert_version(
        &self,
        sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError> {
        let mut conn = self.get_conn().await?;
        conn.exec_drop(sql, (version_id, is_applied)).await?;
        Ok(())
    }
}
