use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::exec::ExitKind;
use crate::linters::ActiveLinterSet;
use crate::project::{Manifest, PackageManager, ProjectContext};

/// Result of one attempted lint command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintOutcome {
    /// Linter name, or the manifest script name.
    pub name: String,
    /// The command line exactly as executed.
    pub command: String,
    /// Captured stdout followed by stderr, or a diagnostic when the command
    /// never produced output of its own.
    pub output: String,
    pub success: bool,
    pub kind: ExitKind,
    pub fix_command: Option<String>,
}

impl LintOutcome {
    /// The tool ran to completion and reported problems. Timeouts and launch
    /// errors are failures too, but not lint failures.
    pub fn is_lint_failure(&self) -> bool {
        matches!(self.kind, ExitKind::NonzeroExit { .. })
    }
}

/// Everything the formatter needs: attempted steps and their outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub package_manager: PackageManager,
    pub success: bool,
    pub attempted: Vec<String>,
    pub outcomes: Vec<LintOutcome>,
    pub no_linters_detected: bool,
}

impl AggregateReport {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager,
            success: true,
            attempted: Vec::new(),
            outcomes: Vec::new(),
            no_linters_detected: false,
        }
    }

    pub fn record(&mut self, outcome: LintOutcome) {
        self.success &= outcome.success;
        self.outcomes.push(outcome);
    }

    pub fn failures(&self) -> impl Iterator<Item = &LintOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    pub fn fix_commands(&self) -> impl Iterator<Item = &str> {
        self.failures().filter_map(|o| o.fix_command.as_deref())
    }
}

/// Input to [`run_lint`](super::run_lint).
pub struct LintRequest<'a> {
    pub project: &'a ProjectContext,
    pub package_manager: PackageManager,
    pub manifest: Option<&'a Manifest>,
    pub linters: &'a ActiveLinterSet,
    pub timeout: Duration,
}

/// Final state of one gate invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// The directory is not a JavaScript/TypeScript project; nothing ran.
    Skipped { dir: PathBuf },
    Completed { report: AggregateReport },
}
