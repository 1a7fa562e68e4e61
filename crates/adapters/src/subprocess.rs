// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External process execution.
//!
//! Commands are described by a [`CommandSpec`] and executed by a
//! [`ProcessRunner`]. Nothing here applies a timeout: a hung tool blocks the
//! caller until it exits.

use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Errors from running an external process
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}{}", format_stderr(stderr))]
    Failed { command: String, status: ExitStatusDisplay, stderr: String },
}

impl ProcessError {
    /// Captured stderr of a command that ran and failed.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ProcessError::Failed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// Exit code, or "signal" when the process was killed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatusDisplay(pub Option<i32>);

impl fmt::Display for ExitStatusDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "status {}", code),
            None => f.write_str("signal"),
        }
    }
}

/// An external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Written to the child's stdin, which is then closed
    pub stdin: Option<String>,
    /// Forward output to the terminal while it runs (see `console`)
    pub streamed: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None, stdin: None, streamed: false }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn streamed(mut self) -> Self {
        self.streamed = true;
        self
    }
}

/// Renders as the command line, e.g. `docker network connect kind git-server`.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` if terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self { status: Some(0), stdout: stdout.into(), stderr: String::new() }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self { status: Some(code), stdout: String::new(), stderr: stderr.into() }
    }
}

/// Runs external commands.
#[async_trait]
pub trait ProcessRunner: Clone + Send + Sync + 'static {
    /// Run to completion and return the output regardless of exit status.
    async fn output(&self, cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError>;

    /// Run to completion; a non-zero exit status is an error.
    async fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
        let output = self.output(cmd).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(ProcessError::Failed {
                command: cmd.to_string(),
                status: ExitStatusDisplay(output.status),
                stderr: output.stderr,
            })
        }
    }
}

/// Runner that spawns real processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn output(&self, cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
        tracing::debug!(command = %cmd, cwd = ?cmd.cwd, streamed = cmd.streamed, "running");
        let output = if cmd.streamed {
            crate::console::run_streamed(cmd).await?
        } else {
            run_captured(cmd).await?
        };
        tracing::trace!(command = %cmd, status = ?output.status, stdout = %output.stdout, "finished");
        Ok(output)
    }
}

async fn run_captured(cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
    let mut command = tokio::process::Command::new(&cmd.program);
    command.args(&cmd.args).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(ref dir) = cmd.cwd {
        command.current_dir(dir);
    }
    command.stdin(if cmd.stdin.is_some() { Stdio::piped() } else { Stdio::null() });

    let mut child = command
        .spawn()
        .map_err(|source| ProcessError::Spawn { command: cmd.to_string(), source })?;

    if let (Some(input), Some(mut stdin)) = (cmd.stdin.as_deref(), child.stdin.take()) {
        stdin
            .write_all(input.as_bytes())
            .await
            .map_err(|source| ProcessError::Io { command: cmd.to_string(), source })?;
        // Dropping stdin closes the pipe so the child sees EOF
    }

    let output = child
        .wait_with_output()
        .await
        .map_err(|source| ProcessError::Io { command: cmd.to_string(), source })?;

    Ok(ProcessOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{CommandSpec, ProcessError, ProcessOutput, ProcessRunner};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    type Handler = Arc<dyn Fn(&CommandSpec) -> ProcessOutput + Send + Sync>;

    struct Rule {
        prefix: String,
        responses: VecDeque<Handler>,
    }

    #[derive(Default)]
    struct FakeRunnerState {
        rules: Vec<Rule>,
        calls: Vec<CommandSpec>,
    }

    /// Fake process runner for testing.
    ///
    /// Commands are matched against registered command-line prefixes; the
    /// most recently registered matching rule wins. A rule with several
    /// responses yields them in order and then repeats the last one.
    /// Unmatched commands succeed with empty output.
    #[derive(Clone, Default)]
    pub struct FakeProcessRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl FakeProcessRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Respond to commands starting with `prefix` with `output`.
        pub fn respond(&self, prefix: &str, output: ProcessOutput) -> &Self {
            self.respond_seq(prefix, vec![output])
        }

        /// Respond with each output in turn, repeating the last.
        pub fn respond_seq(&self, prefix: &str, outputs: Vec<ProcessOutput>) -> &Self {
            let responses = outputs
                .into_iter()
                .map(|out| Arc::new(move |_: &CommandSpec| out.clone()) as Handler)
                .collect();
            self.inner.lock().rules.push(Rule { prefix: prefix.to_string(), responses });
            self
        }

        /// Fail commands starting with `prefix` with exit code 1.
        pub fn fail(&self, prefix: &str, stderr: &str) -> &Self {
            self.respond(prefix, ProcessOutput::failed(1, stderr))
        }

        /// Run `handler` for matching commands, e.g. to create files a real
        /// tool would have produced.
        pub fn on<F>(&self, prefix: &str, handler: F) -> &Self
        where
            F: Fn(&CommandSpec) -> ProcessOutput + Send + Sync + 'static,
        {
            let responses = VecDeque::from([Arc::new(handler) as Handler]);
            self.inner.lock().rules.push(Rule { prefix: prefix.to_string(), responses });
            self
        }

        /// All recorded commands in call order.
        pub fn calls(&self) -> Vec<CommandSpec> {
            self.inner.lock().calls.clone()
        }

        /// Recorded command lines in call order.
        pub fn command_lines(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|c| c.to_string()).collect()
        }

        /// Number of recorded commands starting with `prefix`.
        pub fn count(&self, prefix: &str) -> usize {
            self.command_lines().iter().filter(|c| c.starts_with(prefix)).count()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeProcessRunner {
        async fn output(&self, cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
            let line = cmd.to_string();
            let handler = {
                let mut state = self.inner.lock();
                state.calls.push(cmd.clone());
                state.rules.iter_mut().rev().find(|r| line.starts_with(&r.prefix)).and_then(
                    |rule| {
                        if rule.responses.len() > 1 {
                            rule.responses.pop_front()
                        } else {
                            rule.responses.front().cloned()
                        }
                    },
                )
            };
            // Handlers run outside the lock so they may touch the filesystem freely
            Ok(match handler {
                Some(handler) => handler(cmd),
                None => ProcessOutput::ok(""),
            })
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProcessRunner;

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
