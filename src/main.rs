use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use lintgate::cli::Cli;
use lintgate::exec::SystemExecutor;
use lintgate::hook::{self, HookExit};
use lintgate::pipeline::run_pipeline;
use lintgate::{config, logging, report};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !cli.no_stdin {
        log_payload();
    }

    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve the working directory")?,
    };

    let mut cfg = config::load_or_default(&dir);
    if let Some(timeout) = cli.timeout {
        cfg.timeout = timeout;
    }

    let outcome = run_pipeline(&dir, &cfg, &SystemExecutor);
    println!("{}", report::render(&outcome, cli.format)?);

    Ok(HookExit::for_outcome(&outcome).into())
}

/// How long the host gets to deliver its payload before the check starts.
const PAYLOAD_WAIT: Duration = Duration::from_millis(500);

/// The lint gate inspects the filesystem, not the triggering action, so the
/// payload is only logged. A bad or missing payload never blocks the check,
/// and neither does a stdin pipe the host leaves open.
fn log_payload() {
    if io::stdin().is_terminal() {
        return;
    }
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(hook::read_payload(io::stdin().lock()));
    });
    let Ok(read) = rx.recv_timeout(PAYLOAD_WAIT) else {
        debug!(wait = ?PAYLOAD_WAIT, "stdin still open, continuing without payload");
        return;
    };
    match read {
        Ok(Some(payload)) => debug!(
            tool = %payload.tool_name,
            command = ?payload.tool_input.command,
            file = ?payload.tool_input.file_path,
            "hook payload received"
        ),
        Ok(None) => debug!("no hook payload on stdin"),
        Err(e) => warn!(error = %e, "ignoring hook payload"),
    }
}
