use std::fmt;

use super::exit::SETUP_FAILED;

/// The wrapped command: program name plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a raw argument list into program and arguments.
    /// Returns `None` when there is no program to run.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut it = args.into_iter();
        let program = it.next()?;
        Some(Self::new(program, it.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program and arguments joined by single spaces.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub stdout_tail: Vec<String>,
    pub stderr_tail: Vec<String>,
    pub exit_code: i32,
}

impl RunResult {
    pub fn setup_failed() -> Self {
        Self {
            stdout_tail: Vec::new(),
            stderr_tail: Vec::new(),
            exit_code: SETUP_FAILED,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn has_output(&self) -> bool {
        !self.stdout_tail.is_empty() || !self.stderr_tail.is_empty()
    }
}
