//! PostgreSQL driver.
//!
//! - [`PostgresDialect`]: version table statements for PostgreSQL
//! - `VersionConnection` for `tokio_postgres::Client` and `deadpool_postgres::Pool`

mod connection;
mod dialect;

pub use dialect::PostgresDialect;
