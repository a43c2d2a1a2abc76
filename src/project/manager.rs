use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::manifest::Manifest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Pnpm,
    #[default]
    Npm,
    Yarn,
    Bun,
}

/// Lockfile signals, evaluated top to bottom. The first match wins, so a
/// project mid-migration with two lockfiles always resolves the same way.
pub const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("package-lock.json", PackageManager::Npm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
];

/// Prefixes accepted in the manifest `packageManager` field, in match order.
/// `pnpm` precedes `npm` so that `pnpm@x` never reads as npm.
const DECLARATION_PREFIXES: &[(&str, PackageManager)] = &[
    ("pnpm", PackageManager::Pnpm),
    ("npm", PackageManager::Npm),
    ("yarn", PackageManager::Yarn),
    ("bun", PackageManager::Bun),
];

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Argument prefix that runs a manifest script: `<pm> run <script>`.
    pub fn run_prefix(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Pnpm => &["pnpm", "run"],
            PackageManager::Npm => &["npm", "run"],
            PackageManager::Yarn => &["yarn", "run"],
            PackageManager::Bun => &["bun", "run"],
        }
    }

    /// Argument prefix that runs a locally installed binary.
    pub fn exec_prefix(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Pnpm => &["pnpm", "exec"],
            PackageManager::Npm => &["npm", "exec", "--"],
            PackageManager::Yarn => &["yarn", "run"],
            PackageManager::Bun => &["bun", "x"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn manager_from_lockfile(dir: &Path) -> Option<PackageManager> {
    LOCKFILES
        .iter()
        .find(|(lockfile, _)| dir.join(lockfile).exists())
        .map(|(_, pm)| *pm)
}

/// Match a `packageManager` declaration such as `"pnpm@8.15.0"`.
pub fn manager_from_declaration(declaration: &str) -> Option<PackageManager> {
    let declaration = declaration.trim();
    DECLARATION_PREFIXES
        .iter()
        .find(|(prefix, _)| declaration.starts_with(prefix))
        .map(|(_, pm)| *pm)
}

/// Resolve the governing package manager. A lockfile always takes precedence
/// over a conflicting manifest declaration. Returns `None` when neither
/// source identifies a manager; no default is guessed here.
pub fn resolve_package_manager(dir: &Path, manifest: Option<&Manifest>) -> Option<PackageManager> {
    if let Some(pm) = manager_from_lockfile(dir) {
        debug!(manager = %pm, "package manager resolved from lockfile");
        return Some(pm);
    }

    let declared = manifest
        .and_then(|m| m.package_manager.as_deref())
        .and_then(manager_from_declaration);
    if let Some(pm) = declared {
        debug!(manager = %pm, "package manager resolved from packageManager field");
    }
    declared
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn manifest_declaring(decl: &str) -> Manifest {
        Manifest {
            package_manager: Some(decl.to_string()),
            ..Manifest::default()
        }
    }

    #[test]
    fn each_lockfile_selects_its_manager() {
        for (lockfile, expected) in LOCKFILES {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join(lockfile), "").unwrap();
            assert_eq!(
                resolve_package_manager(dir.path(), None),
                Some(*expected),
                "{lockfile}"
            );
        }
    }

    #[test]
    fn coexisting_lockfiles_follow_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        assert_eq!(manager_from_lockfile(dir.path()), Some(PackageManager::Npm));

        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        for _ in 0..3 {
            assert_eq!(manager_from_lockfile(dir.path()), Some(PackageManager::Pnpm));
        }
    }

    #[test]
    fn declaration_used_without_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest_declaring("yarn@4.1.0");
        assert_eq!(
            resolve_package_manager(dir.path(), Some(&manifest)),
            Some(PackageManager::Yarn)
        );
    }

    #[test]
    fn lockfile_beats_conflicting_declaration() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        let manifest = manifest_declaring("pnpm@8.15.0");
        assert_eq!(
            resolve_package_manager(dir.path(), Some(&manifest)),
            Some(PackageManager::Npm)
        );
    }

    #[test]
    fn declaration_prefixes_do_not_collide() {
        assert_eq!(manager_from_declaration("pnpm@9.0.0"), Some(PackageManager::Pnpm));
        assert_eq!(manager_from_declaration("npm@10.2.0"), Some(PackageManager::Npm));
        assert_eq!(manager_from_declaration("bun@1.1.0"), Some(PackageManager::Bun));
        assert_eq!(manager_from_declaration("deno@2"), None);
        assert_eq!(manager_from_declaration(""), None);
    }

    #[test]
    fn nothing_detectable_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_package_manager(dir.path(), None), None);
        let manifest = Manifest::default();
        assert_eq!(resolve_package_manager(dir.path(), Some(&manifest)), None);
    }

    #[test]
    fn prefixes_match_manager_forms() {
        assert_eq!(PackageManager::Npm.exec_prefix(), &["npm", "exec", "--"]);
        assert_eq!(PackageManager::Pnpm.run_prefix(), &["pnpm", "run"]);
        assert_eq!(PackageManager::default(), PackageManager::Npm);
        assert_eq!(PackageManager::Bun.to_string(), "bun");
    }
}
