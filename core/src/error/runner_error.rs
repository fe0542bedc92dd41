// core/src/error/runner_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn process: {program}: {source}")]
    Spawn { program: String, #[source] source: std::io::Error },

    #[error("child {stream} pipe was not attached")]
    StreamUnavailable { stream: &'static str },

    #[error("failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),
}
