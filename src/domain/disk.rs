use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Disk volume entity (capacity snapshot for one drive on one host)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "DiskInfoRecord", from = "DiskInfoRecord")]
pub struct DiskInfo {
    pub computer_name: String,
    pub drive: String,
    pub drive_type: String,
    pub size: i64,
    pub free_space: i64,
    pub compressed: bool,
}

impl DiskInfo {
    pub fn new(computer_name: impl Into<String>, drive: impl Into<String>) -> Self {
        Self {
            computer_name: computer_name.into(),
            drive: drive.into(),
            ..Self::default()
        }
    }

    pub fn with_drive_type(mut self, drive_type: impl Into<String>) -> Self {
        self.drive_type = drive_type.into();
        self
    }

    pub fn with_capacity(mut self, size: i64, free_space: i64) -> Self {
        self.size = size;
        self.free_space = free_space;
        self
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Share of the volume in use, 0-100.
    ///
    /// A zero-sized volume counts as full. Inconsistent inputs
    /// (`free_space > size`, negative sizes) are not clamped.
    pub fn used_percent(&self) -> f64 {
        if self.size == 0 {
            return 100.0;
        }
        (self.size as f64 - self.free_space as f64) / self.size as f64 * 100.0
    }
}

impl fmt::Display for DiskInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds a rounded -0.0 into 0.0
        let rounded = (self.used_percent() * 100.0).round_ties_even() / 100.0 + 0.0;
        write!(f, "{} : {}%", self.drive, rounded)
    }
}

/// Serialized shape of a disk.
///
/// `UsedPercent` is written for consumers but ignored on the way back in,
/// whatever its JSON type; the value is always recomputed from `Size` and
/// `FreeSpace`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct DiskInfoRecord {
    computer_name: String,
    drive: String,
    drive_type: String,
    size: i64,
    free_space: i64,
    used_percent: Option<serde_json::Value>,
    compressed: bool,
}

impl From<DiskInfo> for DiskInfoRecord {
    fn from(disk: DiskInfo) -> Self {
        let used_percent = Some(serde_json::Value::from(disk.used_percent()));
        Self {
            computer_name: disk.computer_name,
            drive: disk.drive,
            drive_type: disk.drive_type,
            size: disk.size,
            free_space: disk.free_space,
            used_percent,
            compressed: disk.compressed,
        }
    }
}

impl From<DiskInfoRecord> for DiskInfo {
    fn from(record: DiskInfoRecord) -> Self {
        let disk = Self {
            computer_name: record.computer_name,
            drive: record.drive,
            drive_type: record.drive_type,
            size: record.size,
            free_space: record.free_space,
            compressed: record.compressed,
        };

        if let Some(inbound) = record.used_percent.as_ref().and_then(|v| v.as_f64()) {
            let computed = disk.used_percent();
            if inbound != computed {
                trace!(
                    drive = %disk.drive,
                    inbound,
                    computed,
                    "Discarding inbound UsedPercent"
                );
            }
        }

        disk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_full() {
        for free_space in [0, 1, 500, -20, i64::MAX] {
            let disk = DiskInfo::new("HOST", "D:").with_capacity(0, free_space);
            assert_eq!(disk.used_percent(), 100.0);
            assert_eq!(disk.to_string(), "D: : 100%");
        }
    }

    #[test]
    fn test_used_percent() {
        let disk = DiskInfo::new("HOST", "C:").with_capacity(1000, 250);
        assert!((disk.used_percent() - 75.0).abs() < 1e-9);

        let disk = DiskInfo::new("HOST", "C:").with_capacity(3, 2);
        assert!((disk.used_percent() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_used_percent_within_bounds() {
        let size = 500_107_862_016_i64;
        for free_space in [0, 1, size / 7, size / 2, size - 1, size] {
            let disk = DiskInfo::new("HOST", "C:").with_capacity(size, free_space);
            let used = disk.used_percent();
            let expected = (size - free_space) as f64 / size as f64 * 100.0;
            assert!((used - expected).abs() < 1e-9);
            assert!((0.0..=100.0).contains(&used));
        }
    }

    #[test]
    fn test_inconsistent_capacity_is_not_clamped() {
        let disk = DiskInfo::new("HOST", "E:").with_capacity(100, 150);
        assert!((disk.used_percent() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_never_negative_zero() {
        let disk = DiskInfo::new("HOST", "C:").with_capacity(1_000_000, 1_000_001);
        assert!(disk.used_percent() < 0.0);
        assert_eq!(disk.to_string(), "C: : 0%");
    }

    #[test]
    fn test_display() {
        let disk = DiskInfo::new("HOST", "C:").with_capacity(1000, 250);
        assert_eq!(disk.to_string(), "C: : 75%");

        let disk = DiskInfo::new("HOST", "C:").with_capacity(3, 2);
        assert_eq!(disk.to_string(), "C: : 33.33%");

        let disk = DiskInfo::new("HOST", "F:").with_capacity(8, 7);
        assert_eq!(disk.to_string(), "F: : 12.5%");

        let disk = DiskInfo::new("HOST", "G:").with_capacity(3, 1);
        assert_eq!(disk.to_string(), "G: : 66.67%");
    }

    #[test]
    fn test_serialize_writes_used_percent() {
        let disk = DiskInfo::new("HOST", "C:")
            .with_drive_type("Local Disk")
            .with_capacity(1000, 250)
            .with_compressed(true);
        let value = serde_json::to_value(&disk).unwrap();

        assert_eq!(value["ComputerName"], "HOST");
        assert_eq!(value["Drive"], "C:");
        assert_eq!(value["DriveType"], "Local Disk");
        assert_eq!(value["Size"], 1000);
        assert_eq!(value["FreeSpace"], 250);
        assert_eq!(value["UsedPercent"], 75.0);
        assert_eq!(value["Compressed"], true);
    }

    #[test]
    fn test_roundtrip_recomputes_used_percent() {
        let disk = DiskInfo::new("HOST", "C:")
            .with_drive_type("Local Disk")
            .with_capacity(1000, 250)
            .with_compressed(true);
        let json = serde_json::to_string(&disk).unwrap();
        let back: DiskInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(back, disk);
        assert_eq!(back.used_percent(), disk.used_percent());
    }

    #[test]
    fn test_inbound_used_percent_is_ignored() {
        for used in ["12.5", "-4000", "1e300", "null", "\"75%\"", "true", "{}", "[1, 2]"] {
            let json = format!(
                r#"{{"Drive":"C:","Size":1000,"FreeSpace":250,"UsedPercent":{}}}"#,
                used
            );
            let disk: DiskInfo = serde_json::from_str(&json).unwrap();
            assert!((disk.used_percent() - 75.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_missing_members_take_defaults() {
        let disk: DiskInfo = serde_json::from_str(r#"{"Drive":"Z:"}"#).unwrap();
        assert_eq!(disk.drive, "Z:");
        assert_eq!(disk.computer_name, "");
        assert_eq!(disk.size, 0);
        assert!(!disk.compressed);
        assert_eq!(disk.to_string(), "Z: : 100%");
    }
}
