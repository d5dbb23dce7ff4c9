//! Bounded-time command execution.

use crate::error::Result;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or by the timeout).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command was killed for exceeding its timeout.
    pub timed_out: bool,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            timed_out: false,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            timed_out: false,
            success: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timeout(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            timed_out: true,
            success: false,
        }
    }

    /// Trimmed stdout and stderr, joined by a newline when both are present.
    pub fn combined_output(&self) -> String {
        [self.stdout.trim(), self.stderr.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Which pipe a chunk of output came from.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

type Chunk = (Stream, Vec<u8>);

/// Execute a program directly (no shell), killing it after `timeout`.
///
/// Both pipes are drained on background threads so a chatty child never
/// blocks on a full pipe. Output collection shares the same deadline as the
/// child itself: a descendant that inherits the pipes and outlives the child
/// cannot hold the call open past `timeout`.
pub fn execute(program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult> {
    let start = Instant::now();
    let deadline = start + timeout;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let (tx, rx) = mpsc::channel();
    drain(child.stdout.take(), Stream::Stdout, &tx);
    drain(child.stderr.take(), Stream::Stderr, &tx);
    drop(tx);

    let Some(status) = child.wait_timeout(timeout)? else {
        let _ = child.kill();
        let _ = child.wait();
        tracing::debug!(
            "{} killed after {:?}",
            program.display(),
            start.elapsed()
        );
        // Reader threads are left detached: a grandchild may still hold the pipes.
        return Ok(CommandResult::timeout(start.elapsed()));
    };

    let (stdout, stderr, complete) = collect_output(&rx, deadline);
    if !complete {
        tracing::debug!(
            "{} exited but its pipes stayed open; keeping partial output",
            program.display()
        );
    }
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

fn drain<R>(pipe: Option<R>, stream: Stream, tx: &Sender<Chunk>)
where
    R: Read + Send + 'static,
{
    let Some(mut reader) = pipe else {
        return;
    };
    let tx = tx.clone();
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send((stream, buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

/// Gather output until both pipes close or `deadline` passes.
///
/// The flag is false when the deadline cut collection short.
fn collect_output(rx: &Receiver<Chunk>, deadline: Instant) -> (String, String, bool) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let mut complete = true;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, bytes)) => stdout.extend_from_slice(&bytes),
            Ok((Stream::Stderr, bytes)) => stderr.extend_from_slice(&bytes),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                complete = false;
                break;
            }
        }
    }

    (
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
        complete,
    )
}
