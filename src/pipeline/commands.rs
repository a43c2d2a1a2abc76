use std::path::Path;
use std::time::Duration;

use crate::exec::ProcessCommand;
use crate::linters::LinterDescriptor;
use crate::project::PackageManager;

/// Manifest script that, when declared, replaces individual linter runs.
pub const LINT_SCRIPT: &str = "lint";
/// Manifest script suggested as the remedy when the aggregate script fails.
pub const FIX_SCRIPT: &str = "lint:fix";

fn from_argv(argv: Vec<String>, cwd: &Path, timeout: Duration) -> ProcessCommand {
    let mut argv = argv.into_iter();
    let program = argv.next().unwrap_or_default();
    ProcessCommand {
        program,
        args: argv.collect(),
        cwd: cwd.to_path_buf(),
        timeout,
    }
}

fn prefixed(prefix: &[&str], rest: Vec<String>) -> Vec<String> {
    prefix.iter().map(|s| s.to_string()).chain(rest).collect()
}

/// Build `<pm> run <script>`.
pub fn script_command(
    pm: PackageManager,
    script: &str,
    cwd: &Path,
    timeout: Duration,
) -> ProcessCommand {
    from_argv(prefixed(pm.run_prefix(), vec![script.to_string()]), cwd, timeout)
}

/// Build the package manager's local-binary form of a command template.
pub fn exec_command(
    pm: PackageManager,
    template: &str,
    cwd: &Path,
    timeout: Duration,
) -> Result<ProcessCommand, shell_words::ParseError> {
    let words = shell_words::split(template)?;
    Ok(from_argv(prefixed(pm.exec_prefix(), words), cwd, timeout))
}

/// Build the check command for one linter.
pub fn linter_command(
    pm: PackageManager,
    linter: &LinterDescriptor,
    cwd: &Path,
    timeout: Duration,
) -> Result<ProcessCommand, shell_words::ParseError> {
    exec_command(pm, linter.check, cwd, timeout)
}

/// The fix suggestion for a linter, as text for the report. `None` when the
/// linter has no fix template.
pub fn linter_fix_suggestion(pm: PackageManager, linter: &LinterDescriptor) -> Option<String> {
    let fix = linter.fix?;
    Some(format!("{} {fix}", pm.exec_prefix().join(" ")))
}

/// The fix suggestion for a failed aggregate script.
pub fn script_fix_suggestion(pm: PackageManager) -> String {
    format!("{} {FIX_SCRIPT}", pm.run_prefix().join(" "))
}
