// Report rendering for stdout: plain text for the host, or JSON.

mod format;

pub use format::{SKIP_MESSAGE, format_report};

use anyhow::Result;

use crate::pipeline::PipelineOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a pipeline outcome in the requested format.
pub fn render(outcome: &PipelineOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => Ok(match outcome {
            PipelineOutcome::Skipped { .. } => SKIP_MESSAGE.to_string(),
            PipelineOutcome::Completed { report } => format_report(report),
        }),
    }
}
