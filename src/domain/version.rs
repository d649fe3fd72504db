use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VersionParseError;

/// Operating system version (major.minor[.build[.revision]])
///
/// Undefined trailing components sort before any defined value, so
/// `10.0` < `10.0.0` < `10.0.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    build: Option<u32>,
    revision: Option<u32>,
}

impl OsVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    /// Sets the revision, defining the build as 0 if it was undefined.
    pub fn with_revision(mut self, revision: u32) -> Self {
        self.build = Some(self.build.unwrap_or(0));
        self.revision = Some(revision);
        self
    }

    pub fn build(&self) -> Option<u32> {
        self.build
    }

    pub fn revision(&self) -> Option<u32> {
        self.revision
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
            if let Some(revision) = self.revision {
                write!(f, ".{}", revision)?;
            }
        }
        Ok(())
    }
}

impl FromStr for OsVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(VersionParseError::ComponentCount(parts.len()));
        }

        let mut components = Vec::with_capacity(parts.len());
        for (index, part) in parts.iter().enumerate() {
            let value = part
                .parse::<u32>()
                .map_err(|source| VersionParseError::InvalidComponent { index, source })?;
            components.push(value);
        }

        Ok(Self {
            major: components[0],
            minor: components[1],
            build: components.get(2).copied(),
            revision: components.get(3).copied(),
        })
    }
}

impl Serialize for OsVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepted inbound shapes: `"10.0.17134.1"` or an object with
/// `Major`/`Minor`/`Build`/`Revision`, where a negative component is undefined.
#[derive(Deserialize)]
#[serde(untagged)]
enum VersionRepr {
    Text(String),
    Parts {
        #[serde(rename = "Major")]
        major: u32,
        #[serde(rename = "Minor")]
        minor: u32,
        #[serde(rename = "Build", default = "undefined_component")]
        build: i64,
        #[serde(rename = "Revision", default = "undefined_component")]
        revision: i64,
    },
}

fn undefined_component() -> i64 {
    -1
}

impl<'de> Deserialize<'de> for OsVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match VersionRepr::deserialize(deserializer)? {
            VersionRepr::Text(text) => text.parse().map_err(de::Error::custom),
            VersionRepr::Parts {
                major,
                minor,
                build,
                revision,
            } => {
                let build = u32::try_from(build).ok();
                // a revision without a build is not representable
                let revision = build.and(u32::try_from(revision).ok());
                Ok(Self {
                    major,
                    minor,
                    build,
                    revision,
                })
            }
        }
    }
}
