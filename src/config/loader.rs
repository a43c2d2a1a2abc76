use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::Config;

pub const CONFIG_FILE: &str = ".lintgate.yaml";

/// Load config from a `.lintgate.yaml` file in the given directory.
/// Returns `Ok(None)` when no file is present.
pub fn load(dir: &Path) -> Result<Option<Config>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(Some(config))
}

/// Load config, falling back to defaults when the file is missing or invalid.
pub fn load_or_default(dir: &Path) -> Config {
    match load(dir) {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(e) => {
            warn!("ignoring invalid config, using defaults: {e:#}");
            Config::default()
        }
    }
}
