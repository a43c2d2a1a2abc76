use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Describes a child process invocation. `program` is resolved through `PATH`;
/// no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub timeout: Duration,
}

impl ProcessCommand {
    /// The command line as a user would type it, quoting only where needed.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.args))
    }
}

/// How a child process ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExitKind {
    Ok,
    /// `code` is `None` when the process was terminated by a signal.
    NonzeroExit { code: Option<i32> },
    Timeout { seconds: u64 },
    LaunchError { message: String },
}

impl ExitKind {
    pub fn is_ok(&self) -> bool {
        matches!(self, ExitKind::Ok)
    }
}

/// Outcome of a process run: how it ended and everything it printed,
/// stdout followed by stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub kind: ExitKind,
    pub output: String,
}

impl ProcessResult {
    pub fn launch_error(message: impl Into<String>) -> Self {
        Self {
            kind: ExitKind::LaunchError {
                message: message.into(),
            },
            output: String::new(),
        }
    }
}
