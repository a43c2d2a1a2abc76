use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::project::PackageManager;

/// Per-command bound applied when no override is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds each lint command may run before it is killed.
    pub timeout: u64,
    /// Used when a confirmed project has no lockfile and no `packageManager` field.
    pub default_package_manager: PackageManager,
    /// Linter names never run, even when detected.
    pub skip: Vec<String>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            default_package_manager: PackageManager::Npm,
            skip: Vec::new(),
        }
    }
}
