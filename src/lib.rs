//! Pre-flight lint gate for JavaScript/TypeScript projects.
//!
//! The pipeline runs once per hook invocation:
//! - `project`: relevance gate, `package.json`, package-manager resolution.
//! - `linters`: static linter catalog and detection against the project.
//! - `exec`: bounded child-process execution.
//! - `pipeline`: command construction, sequential execution, aggregation.
//! - `report`: text/JSON rendering of the aggregate result.
//! - `hook`: stdin payload and exit-code protocol shared with the host.
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod hook;
pub mod linters;
pub mod logging;
pub mod pipeline;
pub mod project;
pub mod report;
