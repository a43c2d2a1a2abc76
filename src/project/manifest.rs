use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ManifestError;

pub const MANIFEST_FILE: &str = "package.json";

/// The parts of `package.json` the gate cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Manifest {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub package_manager: Option<String>,
}

impl Manifest {
    /// Load `package.json` from `dir`. Returns `Ok(None)` when the file is absent.
    pub fn load(dir: &Path) -> Result<Option<Self>, ManifestError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        let manifest = serde_json::from_str(&contents)
            .map_err(|source| ManifestError::Parse { path, source })?;
        Ok(Some(manifest))
    }

    /// Like [`Manifest::load`], but an unreadable or malformed manifest is
    /// logged and treated as absent.
    pub fn load_lenient(dir: &Path) -> Option<Self> {
        match Self::load(dir) {
            Ok(Some(manifest)) => Some(manifest),
            Ok(None) => {
                debug!(dir = %dir.display(), "no package.json present");
                None
            }
            Err(e) => {
                warn!(error = %e, "ignoring package.json");
                None
            }
        }
    }

    /// Dependency names from `dependencies` and `devDependencies`, merged.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(
                self.dev_dependencies
                    .keys()
                    .filter(|k| !self.dependencies.contains_key(*k)),
            )
            .map(String::as_str)
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}
