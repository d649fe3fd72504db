use serde::{Deserialize, Serialize};

/// Display device attached to a host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Monitor {
    pub computer_name: Option<String>,
    pub computer_type: Option<String>,
    /// BIOS serial number of the host
    pub computer_serial: Option<String>,
    pub monitor_serial: Option<String>,
    pub monitor_type: Option<String>,
}

impl Monitor {
    pub fn new(computer_name: impl Into<String>) -> Self {
        Self {
            computer_name: Some(computer_name.into()),
            ..Self::default()
        }
    }

    pub fn with_computer_type(mut self, computer_type: impl Into<String>) -> Self {
        self.computer_type = Some(computer_type.into());
        self
    }

    pub fn with_computer_serial(mut self, computer_serial: impl Into<String>) -> Self {
        self.computer_serial = Some(computer_serial.into());
        self
    }

    pub fn with_monitor_serial(mut self, monitor_serial: impl Into<String>) -> Self {
        self.monitor_serial = Some(monitor_serial.into());
        self
    }

    pub fn with_monitor_type(mut self, monitor_type: impl Into<String>) -> Self {
        self.monitor_type = Some(monitor_type.into());
        self
    }
}
