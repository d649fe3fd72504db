//! Serializable inventory records describing disk volumes, attached
//! monitors and operating-system state of a host.

pub mod config;
pub mod domain;
pub mod error;
pub mod snapshot;

pub use domain::{DiskInfo, Monitor, OsVersion, SystemInformation};
pub use error::{InventoryError, Result, VersionParseError};
pub use snapshot::Snapshot;
