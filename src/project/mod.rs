// Project inspection: relevance gate, package.json, package manager.

mod detect;
mod manager;
mod manifest;

pub use detect::{PROJECT_MARKERS, ProjectContext, is_relevant_project};
pub use manager::{
    LOCKFILES, PackageManager, manager_from_declaration, manager_from_lockfile,
    resolve_package_manager,
};
pub use manifest::{MANIFEST_FILE, Manifest};
