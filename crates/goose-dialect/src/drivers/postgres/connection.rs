//! [`VersionConnection`] for tokio-postgres clients and deadpool pools.
//!
//! PostgreSQL DDL is transactional, so table creation and the first record
//! commit or roll back together.

use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::{Client, Row};

use crate::core::{VersionConnection, VersionRecord};
use crate::error::BoxError;

fn decode_row(row: &Row) -> std::result::Result<VersionRecord, tokio_postgres::Error> {
    Ok(VersionRecord::new(
        row.try_get::<_, i64>(0)?,
        row.try_get::<_, bool>(1)?,
    ))
}

#[async_trait]
impl VersionConnection for Client {
    async fn query_versions(&self, sql: &str) -> std::result::Result<Vec<VersionRecord>, BoxError> {
        let rows = Client::query(self, sql, &[]).await?;
        let records = rows
            .iter()
            .map(decode_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn execute(&self, sql: &str) -> std::result::Result<(), BoxError> {
        // Simple query protocol: the DDL carries a trailing semicolon
        Client::batch_execute(self, sql).await?;
        Ok(())
    }

    async fn insert_version(
        &self,
        sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError> {
        Client::execute(self, sql, &[&version_id, &is_applied]).await?;
        Ok(())
    }

    async fn initialize_version_table(
        &self,
        create_sql: &str,
        insert_sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError> {
        // `Client::transaction` needs `&mut self`; issue BEGIN/COMMIT directly.
        Client::batch_execute(self, "BEGIN").await?;

        let result = async {
            Client::batch_execute(self, create_sql).await?;
            Client::execute(self, insert_sql, &[&version_id, &is_applied]).await?;
            Ok::<_, tokio_postgres::Error>(())
        }
        .await;

        match result {
            Ok(()) => {
                Client::batch_execute(self, "COMMIT").await?;
                Ok(())
            }
            Err(e) => {
                let _ = Client::batch_execute(self, "ROLLBACK").await;
                Err(e.into())
            }
        }
    }
}

/// Each call checks a client out of the pool and returns it afterwards.
#[async_trait]
impl VersionConnection for Pool {
    async fn query_versions(&self, sql: &str) -> std::result::Result<Vec<VersionRecord>, BoxError> {
        let object = self.get().await?;
        let client: &Client = &object;
        VersionConnection::query_versions(client, sql).await
    }

    async fn execute(&self, sql: &str) -> std::result::Result<(), BoxError> {
        let object = self.get().await?;
        let client: &Client = &object;
        VersionConnection::execute(client, sql).await
    }

    async fn insert_version(
        &self,
        sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError> {
        let object = self.get().await?;
        let client: &Client = &object;
        VersionConnection::insert_version(client, sql, version_id, is_applied).await
    }

    async fn initialize_version_table(
        &self,
        create_sql: &str,
        insert_sql: &str,
        version_id: i64,
        is_applied: bool,
    ) -> std::result::Result<(), BoxError> {
        let mut object = self.get().await?;
        let tx = object.transaction().await?;

        tx.batch_execute(create_sql).await?;
        tx.execute(insert_sql, &[&version_id, &is_applied]).await?;

        tx.commit().await?;
        Ok(())
    }
}
