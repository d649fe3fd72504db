use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Monitor, SystemInformation};
use crate::error::Result;

/// Captured inventory document: hosts plus their monitors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Snapshot {
    pub systems: Vec<SystemInformation>,
    pub monitors: Vec<Monitor>,
}

impl Snapshot {
    pub fn from_system(system: SystemInformation) -> Self {
        Self {
            systems: vec![system],
            monitors: Vec::new(),
        }
    }

    /// Parse a snapshot document.
    ///
    /// Accepted shapes: an object with `Systems`/`Monitors` members, an
    /// array of systems, an empty object (empty snapshot), or any other
    /// object read as a single `SystemInformation`.
    pub fn from_json(value: Value) -> Result<Self> {
        let (is_array, is_empty, wrapped) = match &value {
            Value::Array(_) => (true, false, false),
            Value::Object(o) => (
                false,
                o.is_empty(),
                o.contains_key("Systems") || o.contains_key("Monitors"),
            ),
            _ => (false, false, false),
        };

        let snapshot = if is_array {
            Self {
                systems: serde_json::from_value(value)?,
                monitors: Vec::new(),
            }
        } else if is_empty {
            Self::default()
        } else if wrapped {
            serde_json::from_value(value)?
        } else {
            Self::from_system(serde_json::from_value(value)?)
        };

        debug!(
            systems = snapshot.systems.len(),
            monitors = snapshot.monitors.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Snapshot> {
    let value = serde_json::from_reader(reader)?;
    Snapshot::from_json(value)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Snapshot> {
    let file = File::open(path.as_ref())?;
    load_from_reader(BufReader::new(file))
}
