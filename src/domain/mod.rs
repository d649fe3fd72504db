pub mod disk;
pub mod monitor;
pub mod system;
pub mod version;

pub use disk::DiskInfo;
pub use monitor::Monitor;
pub use system::SystemInformation;
pub use version::OsVersion;
