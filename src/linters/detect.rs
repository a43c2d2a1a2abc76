use std::path::Path;

use tracing::debug;

use super::registry::{LinterDescriptor, REGISTRY};
use crate::project::Manifest;

/// Linters selected for this invocation, in detection order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLinterSet {
    linters: Vec<&'static LinterDescriptor>,
}

impl ActiveLinterSet {
    /// Append `linter` unless already present. Returns whether it was added.
    pub fn insert(&mut self, linter: &'static LinterDescriptor) -> bool {
        if self.contains(linter.name) {
            return false;
        }
        self.linters.push(linter);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.linters.iter().any(|d| d.name == name)
    }

    /// Drop every linter named in `names`.
    pub fn remove_all<S: AsRef<str>>(&mut self, names: &[S]) {
        self.linters
            .retain(|d| !names.iter().any(|n| n.as_ref() == d.name));
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static LinterDescriptor> + '_ {
        self.linters.iter().copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.linters.iter().map(|d| d.name).collect()
    }

    pub fn len(&self) -> usize {
        self.linters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linters.is_empty()
    }
}

/// Detect configured linters from config files, then from manifest dependencies.
///
/// Passes, in order:
/// 1. Any recognized config file in `dir` activates its linter.
/// 2. A registry name among the merged dependency keys activates that linter.
/// 3. A dependency key prefixed by a plugin-convention linter's name (such as
///    `eslint-plugin-react`) activates the base linter.
///
/// Without a manifest only the first pass contributes.
pub fn detect_linters(dir: &Path, manifest: Option<&Manifest>) -> ActiveLinterSet {
    let mut active = ActiveLinterSet::default();

    for descriptor in REGISTRY {
        if let Some(config) = descriptor
            .config_files
            .iter()
            .find(|f| dir.join(f).exists())
        {
            debug!(linter = descriptor.name, config, "linter config found");
            active.insert(descriptor);
        }
    }

    let Some(manifest) = manifest else {
        return active;
    };

    for descriptor in REGISTRY {
        if manifest.has_dependency(descriptor.name) && active.insert(descriptor) {
            debug!(linter = descriptor.name, "linter declared as dependency");
        }
    }

    for descriptor in REGISTRY.iter().filter(|d| d.plugin_prefixed) {
        if active.contains(descriptor.name) {
            continue;
        }
        if let Some(plugin) = manifest
            .dependency_names()
            .find(|dep| dep.starts_with(descriptor.name))
        {
            debug!(linter = descriptor.name, plugin, "linter implied by plugin dependency");
            active.insert(descriptor);
        }
    }

    active
}
