use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot document to read; stdin when unset
    pub input: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            input: env::var("SYSINV_INPUT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            log_level: env::var("SYSINV_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
