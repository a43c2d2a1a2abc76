// Bounded child-process execution with captured output.

pub mod run;
pub mod types;

pub use run::run;
pub use types::{ExitKind, ProcessCommand, ProcessResult};

/// Runs commands on behalf of the lint pipeline.
pub trait Executor {
    fn execute(&self, cmd: &ProcessCommand) -> ProcessResult;
}

/// Spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(&self, cmd: &ProcessCommand) -> ProcessResult {
        run(cmd)
    }
}
