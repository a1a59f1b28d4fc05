//! Core abstractions for migration version tracking.
//!
//! - [`traits`]: the [`Dialect`] strategy and the [`VersionConnection`] boundary
//! - [`record`]: the [`VersionRecord`] row type
//! - [`catalog`]: dialect registry for dependency injection
//!
//! # Architecture
//!
//! The core module defines engine-agnostic abstractions that are implemented
//! by driver modules (`drivers/postgres`, `drivers/mysql`, ...). New engines
//! are added without modifying core code.

pub mod catalog;
pub mod record;
pub mod traits;

pub use catalog::DialectCatalog;
pub use record::VersionRecord;
pub use traits::{Dialect, VersionConnection, VERSION_TABLE};
