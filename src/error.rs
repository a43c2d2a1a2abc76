use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load `package.json`. Never fatal: callers degrade to
/// filesystem-only detection.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to decode the hook payload delivered on stdin.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read hook payload: {0}")]
    Read(#[from] io::Error),
    #[error("malformed hook payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
