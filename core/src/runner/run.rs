use std::process::Stdio;

use tokio::io::AsyncWrite;
use tokio::process::{Child, ChildStderr, ChildStdout, Command};

use crate::error::RunnerError;
use crate::tail::capture;

use super::exit::{normalize_exit, WAIT_FAILED};
use super::types::{Invocation, RunResult};

/// Runs `invocation`, mirroring its output on this process's stdout/stderr.
pub async fn run(invocation: &Invocation, limit: usize) -> RunResult {
    run_with(invocation, limit, tokio::io::stdout(), tokio::io::stderr()).await
}

/// Runs `invocation`, mirroring its stdout to `stdout_echo` and its stderr to
/// `stderr_echo` while keeping the last `limit` lines of each.
///
/// Never fails: setup problems are logged and reported as exit code `-1` with
/// empty tails.
pub async fn run_with<O, E>(
    invocation: &Invocation,
    limit: usize,
    stdout_echo: O,
    stderr_echo: E,
) -> RunResult
where
    O: AsyncWrite + Unpin + Send + 'static,
    E: AsyncWrite + Unpin + Send + 'static,
{
    let (mut child, stdout, stderr) = match spawn(invocation) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!(target: "boom.runner", command = %invocation, error = %e, "could not start command");
            return RunResult::setup_failed();
        }
    };

    tracing::debug!(target: "boom.runner", command = %invocation, pid = ?child.id(), limit, "child started");

    let out_task = tokio::spawn(capture(stdout, stdout_echo, limit, "stdout"));
    let err_task = tokio::spawn(capture(stderr, stderr_echo, limit, "stderr"));
    let (out, err) = tokio::join!(out_task, err_task);

    let stdout_tail = out.unwrap_or_else(|e| {
        tracing::error!(target: "boom.runner", stream = "stdout", error = %e, "capture task failed");
        Vec::new()
    });
    let stderr_tail = err.unwrap_or_else(|e| {
        tracing::error!(target: "boom.runner", stream = "stderr", error = %e, "capture task failed");
        Vec::new()
    });

    let exit_code = match child.wait().await {
        Ok(status) => normalize_exit(status),
        Err(source) => {
            let e = RunnerError::Wait(source);
            tracing::error!(target: "boom.runner", command = %invocation, error = %e, exit_code = WAIT_FAILED, "wait failed");
            WAIT_FAILED
        }
    };

    tracing::debug!(target: "boom.runner", command = %invocation, exit_code, "child finished");

    RunResult {
        stdout_tail,
        stderr_tail,
        exit_code,
    }
}

fn spawn(invocation: &Invocation) -> Result<(Child, ChildStdout, ChildStderr), RunnerError> {
    let mut child = Command::new(invocation.program())
        .args(invocation.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;

    let (stdout, stderr) = take_pipes(&mut child)?;
    Ok((child, stdout, stderr))
}

/// Detaches both output pipes. Without both there is nothing to capture, so
/// the child is killed; tokio reaps it once the handle is dropped.
fn take_pipes(child: &mut Child) -> Result<(ChildStdout, ChildStderr), RunnerError> {
    match (child.stdout.take(), child.stderr.take()) {
        (Some(stdout), Some(stderr)) => Ok((stdout, stderr)),
        (stdout, _) => {
            let stream = if stdout.is_none() { "stdout" } else { "stderr" };
            if let Err(e) = child.start_kill() {
                tracing::warn!(target: "boom.runner", stream, pid = ?child.id(), error = %e, "could not kill unwired child");
            }
            Err(RunnerError::StreamUnavailable { stream })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_pipe_kills_child() {
        let mut child = Command::new("sleep")
            .arg("30")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let err = take_pipes(&mut child).unwrap_err();

        assert!(matches!(err, RunnerError::StreamUnavailable { stream: "stderr" }));
        let status = child.wait().await.unwrap();
        assert!(!status.success());
        assert_eq!(normalize_exit(status), 128 + 9);
    }

    #[tokio::test]
    async fn both_pipes_are_detached() {
        let mut child = Command::new("true")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        assert!(take_pipes(&mut child).is_ok());
        assert!(child.stdout.is_none() && child.stderr.is_none());
        child.wait().await.unwrap();
    }
}
