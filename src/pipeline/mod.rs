pub mod commands;
pub mod orchestrator;
mod runner;
mod types;

pub use orchestrator::run_pipeline;
pub use runner::{NO_LINTERS_DETECTED, run_lint};
pub use types::{AggregateReport, LintOutcome, LintRequest, PipelineOutcome};
