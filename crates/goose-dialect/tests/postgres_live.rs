//! Live PostgreSQL tests for the tokio-postgres and deadpool adapters.
//!
//! Run with:
//! GOOSE_TEST_POSTGRES="host=localhost user=postgres password=postgres dbname=postgres" \
//!     cargo test --package goose-dialect --test postgres_live -- --ignored
//!
//! Each test works in its own schema (via `search_path`), which is reset first.

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use goose_dialect::{
    dialect_by_name, Dialect, DialectError, VersionConnection, VersionRecord, VersionStore,
};
use tokio_postgres::{Client, Config as PgConfig, NoTls};

const CONN_ENV: &str = "GOOSE_TEST_POSTGRES";

fn pg_config(schema: &str) -> PgConfig {
    let conn_str = std::env::var(CONN_ENV)
        .unwrap_or_else(|_| panic!("{} must hold a PostgreSQL connection string", CONN_ENV));
    let mut config: PgConfig = conn_str.parse().expect("valid connection string");
    config.options(&format!("-c search_path={}", schema));
    config
}

/// Connect with `search_path` set to a freshly emptied `schema`.
async fn connect(schema: &str) -> Client {
    let (client, connection) = pg_config(schema)
        .connect(NoTls)
        .await
        .expect("Failed to connect");
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {}", e);
        }
    });

    client
        .batch_execute(&format!(
            "DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema}"
        ))
        .await
        .expect("Failed to reset schema");
    client
}

async fn pool(schema: &str) -> Pool {
    // Reset the schema through a plain client first
    connect(schema).await;

    let mgr_config = ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    };
    let mgr = Manager::from_config(pg_config(schema), NoTls, mgr_config);
    Pool::builder(mgr)
        .max_size(2)
        .build()
        .expect("Failed to build pool")
}

fn records(rows: &[(i64, bool)]) -> Vec<VersionRecord> {
    rows.iter().copied().map(VersionRecord::from).collect()
}

async fn assert_history_order(conn: &dyn VersionConnection) {
    let dialect = dialect_by_name("postgres").unwrap();

    conn.execute(dialect.create_version_table_sql())
        .await
        .expect("DDL with trailing semicolon runs");
    for (version_id, is_applied) in [(1, true), (2, true), (3, false)] {
        conn.insert_version(dialect.insert_version_sql(), version_id, is_applied)
            .await
            .expect("insert binds (version_id, is_applied)");
    }

    let history = dialect.query_version_history(conn).await.unwrap();
    assert_eq!(history, records(&[(3, false), (2, true), (1, true)]));
}

async fn assert_initialization_rolls_back(conn: &dyn VersionConnection) {
    let dialect = dialect_by_name("postgres").unwrap();

    // The insert fails, so the CREATE TABLE must not survive
    let bad_insert = "INSERT INTO goose_db_version (version_id, is_applied) VALUES ($1, $2, 0)";
    assert!(conn
        .initialize_version_table(dialect.create_version_table_sql(), bad_insert, 0, true)
        .await
        .is_err());

    let err = dialect.query_version_history(conn).await.unwrap_err();
    assert!(err.is_table_missing());

    let store = VersionStore::new(&dialect, conn);
    assert_eq!(store.ensure_db_version().await.unwrap(), 0);
    assert_eq!(store.history().await.unwrap(), records(&[(0, true)]));
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_client_missing_table() {
    let client = connect("goose_dialect_client_missing").await;
    let dialect = dialect_by_name("postgres").unwrap();

    match dialect.query_version_history(&client).await {
        Err(DialectError::TableMissing(cause)) => {
            assert!(cause.to_string().contains("goose_db_version"));
        }
        other => panic!("expected TableMissing, got {:?}", other),
    }
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_client_history_order() {
    let client = connect("goose_dialect_client_order").await;
    assert_history_order(&client).await;
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_client_initialization_is_atomic() {
    let client = connect("goose_dialect_client_init").await;
    assert_initialization_rolls_back(&client).await;
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_pool_missing_table() {
    let pool = pool("goose_dialect_pool_missing").await;
    let dialect = dialect_by_name("postgres").unwrap();

    let err = dialect.query_version_history(&pool).await.unwrap_err();
    assert!(err.is_table_missing());
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_pool_history_order() {
    let pool = pool("goose_dialect_pool_order").await;
    assert_history_order(&pool).await;
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_pool_initialization_is_atomic() {
    let pool = pool("goose_dialect_pool_init").await;
    assert_initialization_rolls_back(&pool).await;
}
