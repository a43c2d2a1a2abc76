use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::exec::Executor;
use crate::linters::detect_linters;
use crate::project::{Manifest, ProjectContext, resolve_package_manager};

use super::runner::run_lint;
use super::types::{LintRequest, PipelineOutcome};

/// Run the whole gate against `dir`: detect, run, aggregate.
///
/// Directories that are not JavaScript/TypeScript projects are skipped
/// without touching the executor.
pub fn run_pipeline(dir: &Path, cfg: &Config, executor: &dyn Executor) -> PipelineOutcome {
    let project = ProjectContext::detect(dir);
    if !project.is_relevant() {
        info!(dir = %dir.display(), "not a JavaScript project, skipping");
        return PipelineOutcome::Skipped {
            dir: dir.to_path_buf(),
        };
    }

    let manifest = Manifest::load_lenient(project.root());

    let package_manager = resolve_package_manager(project.root(), manifest.as_ref())
        .unwrap_or_else(|| {
            debug!(
                default = %cfg.default_package_manager,
                "no lockfile or packageManager field, using default"
            );
            cfg.default_package_manager
        });

    let mut linters = detect_linters(project.root(), manifest.as_ref());
    if !cfg.skip.is_empty() {
        linters.remove_all(&cfg.skip);
    }
    info!(
        manager = %package_manager,
        linters = ?linters.names(),
        "detection complete"
    );

    let report = run_lint(
        &LintRequest {
            project: &project,
            package_manager,
            manifest: manifest.as_ref(),
            linters: &linters,
            timeout: cfg.timeout(),
        },
        executor,
    );

    PipelineOutcome::Completed { report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    use crate::exec::{ExitKind, ProcessCommand, ProcessResult};
    use crate::project::PackageManager;

    #[derive(Default)]
    struct CountingExecutor {
        calls: Cell<usize>,
    }

    impl Executor for CountingExecutor {
        fn execute(&self, _cmd: &ProcessCommand) -> ProcessResult {
            self.calls.set(self.calls.get() + 1);
            ProcessResult {
                kind: ExitKind::Ok,
                output: String::new(),
            }
        }
    }

    fn completed(outcome: PipelineOutcome) -> crate::pipeline::AggregateReport {
        match outcome {
            PipelineOutcome::Completed { report } => report,
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn unrelated_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]").unwrap();
        let exec = CountingExecutor::default();

        let outcome = run_pipeline(dir.path(), &Config::default(), &exec);
        assert!(matches!(outcome, PipelineOutcome::Skipped { .. }));
        assert_eq!(exec.calls.get(), 0);
    }

    #[test]
    fn default_manager_applies_to_confirmed_project() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
        let cfg = Config {
            default_package_manager: PackageManager::Pnpm,
            ..Config::default()
        };

        let report = completed(run_pipeline(dir.path(), &cfg, &CountingExecutor::default()));
        assert_eq!(report.package_manager, PackageManager::Pnpm);
        assert_eq!(report.outcomes[0].command, "pnpm exec tsc --noEmit");
    }

    #[test]
    fn skip_list_removes_linters() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
        fs::write(dir.path().join(".prettierrc"), "{}").unwrap();
        let cfg = Config {
            skip: vec!["tsc".into()],
            ..Config::default()
        };
        let exec = CountingExecutor::default();

        let report = completed(run_pipeline(dir.path(), &cfg, &exec));
        assert_eq!(report.attempted, vec!["prettier"]);
        assert_eq!(exec.calls.get(), 1);
    }

    #[test]
    fn malformed_manifest_degrades_to_config_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{ \"scripts\": ").unwrap();
        fs::write(dir.path().join(".eslintrc.json"), "{}").unwrap();

        let report = completed(run_pipeline(
            dir.path(),
            &Config::default(),
            &CountingExecutor::default(),
        ));
        assert_eq!(report.attempted, vec!["eslint"]);
        assert_eq!(report.package_manager, PackageManager::Npm);
    }
}
