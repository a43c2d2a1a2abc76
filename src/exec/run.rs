use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::types::{ExitKind, ProcessCommand, ProcessResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long to wait for the pipes to close once the process group is killed.
const KILL_GRACE: Duration = Duration::from_secs(2);

/// Run a command to completion or until its timeout expires.
///
/// stdout and stderr are drained on helper threads so a chatty child can
/// never block on a full pipe. The timeout covers the whole run, output
/// included: a background process that keeps the pipes open after the
/// direct child exits counts as a timeout too. On timeout the child (and, on
/// unix, its whole process group) is killed. Every failure mode is folded
/// into the returned [`ProcessResult`]; this function does not error.
pub fn run(cmd: &ProcessCommand) -> ProcessResult {
    let mut command = Command::new(&cmd.program);
    command
        .args(&cmd.args)
        .current_dir(&cmd.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Package managers fork the real linter; a fresh group lets a timeout
        // take down the grandchildren too.
        command.process_group(0);
    }

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!(command = %cmd.display(), error = %e, "failed to launch");
            return ProcessResult::launch_error(format!("Failed to launch `{}`: {e}", cmd.program));
        }
    };

    let mut captured = Captured::start(&mut child);

    let start = Instant::now();
    let deadline = start + cmd.timeout;
    let timed_out = ExitKind::Timeout {
        seconds: cmd.timeout.as_secs(),
    };
    let mut kind = loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                break if status.success() {
                    ExitKind::Ok
                } else {
                    ExitKind::NonzeroExit {
                        code: status.code(),
                    }
                };
            }
            Ok(None) => {}
            Err(e) => {
                kill(&mut child);
                break ExitKind::LaunchError {
                    message: format!("Failed to wait on `{}`: {e}", cmd.program),
                };
            }
        }

        if Instant::now() >= deadline {
            warn!(command = %cmd.display(), timeout = ?cmd.timeout, "timed out, killing");
            kill(&mut child);
            break timed_out.clone();
        }

        std::thread::sleep(POLL_INTERVAL);
    };

    if !matches!(kind, ExitKind::Timeout { .. }) && !captured.wait_until(deadline) {
        warn!(
            command = %cmd.display(),
            timeout = ?cmd.timeout,
            "output still held open after exit, killing process group"
        );
        kill(&mut child);
        kind = timed_out;
    }
    if !captured.wait_until(Instant::now() + KILL_GRACE) {
        warn!(command = %cmd.display(), "pipes never closed, dropping remaining output");
    }

    debug!(command = %cmd.display(), ?kind, elapsed = ?start.elapsed(), "process finished");
    ProcessResult {
        kind,
        output: captured.into_output(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Output collected from the child's pipes by the drain threads.
struct Captured {
    rx: Receiver<(Stream, Vec<u8>)>,
    pending: usize,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Captured {
    fn start(child: &mut Child) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut pending = 0;
        if let Some(pipe) = child.stdout.take() {
            drain(pipe, Stream::Stdout, tx.clone());
            pending += 1;
        }
        if let Some(pipe) = child.stderr.take() {
            drain(pipe, Stream::Stderr, tx);
            pending += 1;
        }
        Self {
            rx,
            pending,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    /// Wait for every pipe to reach EOF. Returns `false` if the deadline
    /// passes first.
    fn wait_until(&mut self, deadline: Instant) -> bool {
        while self.pending > 0 {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(left) {
                Ok((stream, buf)) => {
                    match stream {
                        Stream::Stdout => self.stdout = buf,
                        Stream::Stderr => self.stderr = buf,
                    }
                    self.pending -= 1;
                }
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => self.pending = 0,
            }
        }
        true
    }

    fn into_output(self) -> String {
        let mut output = String::from_utf8_lossy(&self.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&self.stderr));
        output
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R, stream: Stream, tx: Sender<(Stream, Vec<u8>)>) {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        // A read error only truncates what we report.
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((stream, buf));
    });
}

fn kill(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: kill(2) with a negative pid signals the process group we
            // created via `process_group(0)`; it has no memory-safety effects.
            unsafe {
                libc::kill(-pgid, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}
