use std::num::ParseIntError;

use thiserror::Error;

/// Failure to parse a dotted OS version string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Expected 2 to 4 version components, found {0}")]
    ComponentCount(usize),

    #[error("Invalid version component at index {index}: {source}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
