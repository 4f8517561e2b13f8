//! Bounded external command execution.
//!
//! Platform fact providers shell out to tools like `sw_vers` and `ip`. Each
//! invocation runs exactly once under a hard timeout: stdout is drained by a
//! named reader thread, the caller waits on a bounded channel, and on expiry
//! the child is killed and reaped so a wedged tool can never hang the report
//! or leak a process handle.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossbeam::channel::{bounded, RecvTimeoutError};
use log::debug;

use crate::constants::SHELL_QUERY_TIMEOUT_SECS;

/// One-shot external command runner with a per-invocation timeout
#[derive(Debug, Clone, Copy)]
pub struct ShellQuery {
    timeout: Duration,
}

impl Default for ShellQuery {
    fn default() -> Self {
        ShellQuery::new()
    }
}

impl ShellQuery {
    pub fn new() -> Self {
        ShellQuery {
            timeout: Duration::from_secs(SHELL_QUERY_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        ShellQuery { timeout }
    }

    /// Runs the command and returns its full standard output.
    ///
    /// Spawn failure, timeout, and a non-zero exit status are all errors;
    /// callers treat an absent tool and a failing tool the same way. On
    /// timeout the child is killed and reaped before returning.
    pub fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!("Running {} {:?} with {:?} timeout", program, args, self.timeout);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run {}", program))?;

        let mut stdout = child
            .stdout
            .take()
            .context("Child process had no stdout handle")?;

        let (sender, receiver) = bounded::<std::io::Result<String>>(1);
        std::thread::Builder::new()
            .name(format!("shell-{}", program))
            .spawn(move || {
                let mut buf = String::new();
                let result = stdout.read_to_string(&mut buf).map(|_| buf);
                // Channel holds one slot, so this never blocks even when the
                // query already timed out
                let _ = sender.send(result);
            })
            .context("Failed to spawn output reader thread")?;

        match receiver.recv_timeout(self.timeout) {
            Ok(read_result) => {
                let output =
                    read_result.with_context(|| format!("Failed to read output of {}", program))?;
                let status = child
                    .wait()
                    .with_context(|| format!("Failed to wait on {}", program))?;
                if !status.success() {
                    bail!("{} exited with {}", program, status);
                }
                Ok(output)
            }
            Err(RecvTimeoutError::Timeout) => {
                reap(&mut child, program);
                bail!("{} did not finish within {:?}", program, self.timeout);
            }
            Err(RecvTimeoutError::Disconnected) => {
                reap(&mut child, program);
                bail!("Output reader for {} exited without a result", program);
            }
        }
    }

    /// Runs the command and returns the first line of output, trimmed.
    ///
    /// Empty output counts as a failure so callers can fall back without
    /// printing blank values.
    pub fn first_line(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self.output(program, args)?;
        let line = output.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            bail!("{} produced no output", program);
        }
        Ok(line.to_string())
    }
}

/// Kill and wait so the child never outlives the query as a zombie
fn reap(child: &mut Child, program: &str) {
    if let Err(e) = child.kill() {
        debug!("Failed to kill {}: {}", program, e);
    }
    if let Err(e) = child.wait() {
        debug!("Failed to reap {}: {}", program, e);
    }
}
