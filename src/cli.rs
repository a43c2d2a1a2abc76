//! CLI argument parsing via `clap`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "lintgate",
    version,
    about = "Pre-flight lint gate for JavaScript/TypeScript projects",
    long_about = "Detects the package manager and configured linters of the project in the \
                  working directory, runs them with a bounded timeout, and reports the result.\n\n\
                  Reads the host's hook payload from stdin when one is piped in.\n\
                  Exit codes: 0 = skipped or passed, 1 = at least one check failed.",
    after_help = "Examples:\n  lintgate\n  lintgate --dir web --format json\n  LINTGATE_LOG=debug lintgate --no-stdin"
)]
pub struct Cli {
    #[arg(long, help = "Project directory (default: current dir)")]
    pub dir: Option<PathBuf>,
    #[arg(long, help = "Seconds each lint command may run (default: 120 or .lintgate.yaml)")]
    pub timeout: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Report format")]
    pub format: OutputFormat,
    #[arg(long, action = ArgAction::SetTrue, help = "Do not read a hook payload from stdin")]
    pub no_stdin: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (stderr)")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["lintgate"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.timeout.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.no_stdin);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "lintgate", "--dir", "web", "--timeout", "30", "--format", "json", "--no-stdin", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("web")));
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_stdin);
        assert_eq!(cli.verbose, 2);
    }
}
