//! ClickHouse driver.
//!
//! Provides [`ClickHouseDialect`]. There is no ClickHouse connection adapter;
//! callers implement `VersionConnection` over their own client.

mod dialect;

pub use dialect::ClickHouseDialect;
