use serde::{Deserialize, Serialize};

use super::{DiskInfo, OsVersion};

/// Operating system and memory snapshot for one host, owning its disks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SystemInformation {
    pub computer_name: String,
    /// OS product name
    pub name: String,
    pub version: Option<OsVersion>,
    pub service_pack: String,
    pub manufacturer: String,
    pub windows_directory: String,
    pub locale: String,
    pub free_physical_memory: i64,
    pub virtual_memory: i64,
    pub free_virtual_memory: i64,
    pub disks: Vec<DiskInfo>,
}

impl SystemInformation {
    pub fn new(computer_name: impl Into<String>) -> Self {
        Self {
            computer_name: computer_name.into(),
            ..Self::default()
        }
    }

    pub fn with_os(mut self, name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        self.name = name.into();
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn with_version(mut self, version: OsVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_memory(
        mut self,
        free_physical_memory: i64,
        virtual_memory: i64,
        free_virtual_memory: i64,
    ) -> Self {
        self.free_physical_memory = free_physical_memory;
        self.virtual_memory = virtual_memory;
        self.free_virtual_memory = free_virtual_memory;
        self
    }

    pub fn with_disks(mut self, disks: Vec<DiskInfo>) -> Self {
        self.disks = disks;
        self
    }

    /// Append a disk. The disk's `computer_name` is kept as given.
    pub fn add_disk(&mut self, disk: DiskInfo) {
        self.disks.push(disk);
    }
}
