use crate::pipeline::{AggregateReport, NO_LINTERS_DETECTED};

pub const SKIP_MESSAGE: &str = "Not a JavaScript project, skipping lint check.";

const HEAVY_RULE: &str = "============================================================";
const LIGHT_RULE: &str = "------------------------------------------------------------";

const REMEDIATION_STEPS: &[&str] = &[
    "1. Reading each error message carefully",
    "2. Locating the files mentioned in the errors",
    "3. Making the necessary code changes to fix each issue",
    "4. Running the lint command again to verify fixes",
];

/// Render the human-readable report.
///
/// Layout: a "running" line, a banner, the attempted linters and overall
/// status, then, only on failure, each failing command with its output, the
/// remediation steps, and any auto-fix commands collected along the way.
pub fn format_report(report: &AggregateReport) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(format!("Running lint check (using {})...", report.package_manager));
    out.push(String::new());
    out.push(HEAVY_RULE.into());
    out.push("LINT CHECK RESULTS".into());
    out.push(HEAVY_RULE.into());
    out.push(String::new());

    let checked = if report.no_linters_detected {
        NO_LINTERS_DETECTED.to_string()
    } else {
        report.attempted.join(", ")
    };
    out.push(format!("Linters checked: {checked}"));
    out.push(format!(
        "Status: {}",
        if report.success {
            "✅ PASSED"
        } else {
            "❌ FAILED"
        }
    ));
    out.push(String::new());

    if report.success {
        return out.join("\n");
    }

    out.push(LIGHT_RULE.into());
    out.push("ERRORS FOUND - Please fix the following issues:".into());
    out.push(LIGHT_RULE.into());

    for failure in report.failures() {
        out.push(String::new());
        out.push(format!("[{}]", failure.name.to_uppercase()));
        out.push(format!("Command: {}", failure.command));
        out.push(String::new());
        out.push(failure.output.trim_end().to_string());
        out.push(String::new());
    }

    out.push(LIGHT_RULE.into());
    out.push("HOW TO FIX:".into());
    out.push(LIGHT_RULE.into());
    out.push(String::new());
    out.push("Please fix the lint errors shown above by:".into());
    out.extend(REMEDIATION_STEPS.iter().map(|s| s.to_string()));
    out.push(String::new());

    let fixes: Vec<&str> = report.fix_commands().collect();
    if !fixes.is_empty() {
        out.push("Auto-fixable issues can be resolved by running:".into());
        out.extend(fixes.iter().map(|cmd| format!("  {cmd}")));
        out.push(String::new());
        out.push("For issues that can't be auto-fixed, manually edit the files.".into());
    }
    out.push(String::new());

    out.join("\n")
}
