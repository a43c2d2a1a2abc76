// Linter catalog and filesystem/manifest-driven detection.

mod detect;
mod registry;

pub use detect::{ActiveLinterSet, detect_linters};
pub use registry::{LinterDescriptor, REGISTRY, lookup};
