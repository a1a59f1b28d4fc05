//! # goose-dialect
//!
//! SQL dialects for the `goose_db_version` migration tracking table.
//!
//! A dialect knows three things about one database engine:
//!
//! - the DDL that creates the version table
//! - the INSERT template recording a version, in the engine's placeholder syntax
//! - how to read the version history, most recent first
//!
//! Supported engines are PostgreSQL, MySQL and ClickHouse. Any failure of the
//! history query is reported as [`DialectError::TableMissing`], the signal to
//! create the table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use goose_dialect::{dialect_by_name, VersionStore};
//!
//! # async fn run(client: tokio_postgres::Client) -> goose_dialect::Result<()> {
//! let dialect = dialect_by_name("postgres").expect("builtin dialect");
//! let store = VersionStore::new(&dialect, &client);
//!
//! let current = store.ensure_db_version().await?;
//! store.record_version(current + 1, true).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod state;

// Re-exports for convenient access
pub use crate::config::{DbConf, DriverConfig};
pub use crate::core::{Dialect, DialectCatalog, VersionConnection, VersionRecord, VERSION_TABLE};
pub use drivers::{dialect_by_name, ClickHouseDialect, DialectImpl, MysqlDialect, PostgresDialect};
pub use error::{BoxError, DialectError, Result};
pub use state::{current_version, VersionStore};
