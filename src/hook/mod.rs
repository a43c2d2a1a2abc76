// Hook protocol shared with the host: JSON payload in, exit code out.

mod payload;

pub use payload::{HookPayload, ToolInput, parse_payload, read_payload};

use std::process::ExitCode;

use crate::pipeline::PipelineOutcome;

/// Exit codes understood by the automation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HookExit {
    /// Not applicable, or every check passed.
    Allow = 0,
    /// At least one check failed; the report explains what to fix.
    Fail = 1,
    /// Used by blocking hooks to veto the action outright.
    Block = 2,
}

impl HookExit {
    pub fn for_outcome(outcome: &PipelineOutcome) -> Self {
        match outcome {
            PipelineOutcome::Skipped { .. } => HookExit::Allow,
            PipelineOutcome::Completed { report } if report.success => HookExit::Allow,
            PipelineOutcome::Completed { .. } => HookExit::Fail,
        }
    }
}

impl From<HookExit> for ExitCode {
    fn from(exit: HookExit) -> Self {
        ExitCode::from(exit as u8)
    }
}
