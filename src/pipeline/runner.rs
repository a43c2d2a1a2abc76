use tracing::{info, warn};

use crate::exec::{ExitKind, Executor, ProcessCommand, ProcessResult};

use super::commands::{
    FIX_SCRIPT, LINT_SCRIPT, linter_command, linter_fix_suggestion, script_command,
    script_fix_suggestion,
};
use super::types::{AggregateReport, LintOutcome, LintRequest};

/// Marker shown in place of an attempted-linter list when nothing applies.
pub const NO_LINTERS_DETECTED: &str = "No linters detected";

/// Run the lint step for a confirmed project.
///
/// A manifest `lint` script is authoritative: when present it is the only
/// command run, and the detected linter set is ignored. Otherwise every
/// detected linter runs in order. A failing linter never stops the batch.
pub fn run_lint(req: &LintRequest<'_>, executor: &dyn Executor) -> AggregateReport {
    let pm = req.package_manager;
    let cwd = req.project.root();
    let mut report = AggregateReport::new(pm);

    if let Some(manifest) = req.manifest
        && manifest.has_script(LINT_SCRIPT)
    {
        if !req.linters.is_empty() {
            info!(
                bypassed = ?req.linters.names(),
                "package.json lint script supersedes detected linters"
            );
        }
        let cmd = script_command(pm, LINT_SCRIPT, cwd, req.timeout);
        report
            .attempted
            .push(format!("package.json script: {LINT_SCRIPT}"));

        let mut outcome = execute(executor, LINT_SCRIPT, &cmd);
        if outcome.is_lint_failure() && manifest.has_script(FIX_SCRIPT) {
            outcome.fix_command = Some(script_fix_suggestion(pm));
        }
        report.record(outcome);
        return report;
    }

    if req.linters.is_empty() {
        info!("no linters detected");
        report.no_linters_detected = true;
        return report;
    }

    for linter in req.linters.iter() {
        report.attempted.push(linter.name.to_string());

        let mut outcome = match linter_command(pm, linter, cwd, req.timeout) {
            Ok(cmd) => execute(executor, linter.name, &cmd),
            Err(e) => {
                warn!(linter = linter.name, error = %e, "invalid command template");
                LintOutcome {
                    name: linter.name.to_string(),
                    command: linter.check.to_string(),
                    output: format!("Invalid command template: {e}"),
                    success: false,
                    kind: ExitKind::LaunchError {
                        message: e.to_string(),
                    },
                    fix_command: None,
                }
            }
        };
        if outcome.is_lint_failure() {
            outcome.fix_command = linter_fix_suggestion(pm, linter);
        }
        report.record(outcome);
    }

    report
}

fn execute(executor: &dyn Executor, name: &str, cmd: &ProcessCommand) -> LintOutcome {
    let command = cmd.display();
    info!(linter = name, %command, "running");

    let ProcessResult { kind, output } = executor.execute(cmd);
    let output = match &kind {
        ExitKind::Timeout { seconds } => {
            let mut msg = format!("Lint command timed out after {seconds} seconds");
            if !output.is_empty() {
                msg.push_str("\n\n");
                msg.push_str(&output);
            }
            msg
        }
        ExitKind::LaunchError { message } if output.is_empty() => message.clone(),
        _ => output,
    };

    if kind.is_ok() {
        info!(linter = name, "passed");
    } else {
        warn!(linter = name, ?kind, "failed");
    }

    LintOutcome {
        name: name.to_string(),
        command,
        output,
        success: kind.is_ok(),
        kind,
        fix_command: None,
    }
}
