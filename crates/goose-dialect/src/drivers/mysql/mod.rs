//! MySQL/MariaDB database driver.
//!
//! - [`MysqlDialect`]: version table statements for MySQL
//! - `VersionConnection` for `mysql_async::Pool`
//!
//! # Feature Flag
//!
//! The dialect is always available. The connection adapter is only compiled
//! when the `mysql` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! goose-dialect = { version = "0.1", features = ["mysql"] }
//! ```
//!
//! # Supported Versions
//!
//! - MySQL 5.7+, 8.0+
//! - MariaDB 10.2+

#[cfg(feature = "mysql")]
mod connection;
mod dialect;

pub use dialect::MysqlDialect;
