use std::path::{Path, PathBuf};

/// Entries whose presence marks a directory as a JavaScript/TypeScript project.
pub const PROJECT_MARKERS: &[&str] = &[
    "package.json",
    "node_modules",
    "tsconfig.json",
    "jsconfig.json",
];

/// True iff any project marker exists directly under `dir`.
pub fn is_relevant_project(dir: &Path) -> bool {
    PROJECT_MARKERS
        .iter()
        .any(|marker| dir.join(marker).exists())
}

/// The directory under inspection, classified once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    relevant: bool,
}

impl ProjectContext {
    pub fn detect(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let relevant = is_relevant_project(&root);
        Self { root, relevant }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_relevant(&self) -> bool {
        self.relevant
    }
}
