// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streamed command execution.
//!
//! Long-running tools (`kind create cluster`) draw progress spinners that
//! only render against a terminal. When stdout is a TTY on Unix the child is
//! attached to a pseudo-terminal whose output is forwarded to our stdout;
//! otherwise stdout and stderr are piped and teed line by line. Either way
//! the output is also captured into the returned [`ProcessOutput`].

use crate::subprocess::{CommandSpec, ProcessError, ProcessOutput};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

#[cfg(unix)]
pub(crate) async fn run_streamed(cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        return run_teed(cmd).await;
    }
    let owned = cmd.clone();
    tokio::task::spawn_blocking(move || pty::run(&owned))
        .await
        .map_err(|e| ProcessError::Io { command: cmd.to_string(), source: std::io::Error::other(e) })?
}

#[cfg(not(unix))]
pub(crate) async fn run_streamed(cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
    run_teed(cmd).await
}

async fn run_teed(cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
    let mut command = tokio::process::Command::new(&cmd.program);
    command.args(&cmd.args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(ref dir) = cmd.cwd {
        command.current_dir(dir);
    }

    let mut child = command
        .spawn()
        .map_err(|source| ProcessError::Spawn { command: cmd.to_string(), source })?;

    let io_err = |source| ProcessError::Io { command: cmd.to_string(), source };
    let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
        (Some(out), Some(err)) => (out, err),
        _ => return Err(io_err(std::io::Error::other("child pipes unavailable"))),
    };

    let (stdout, stderr) =
        tokio::try_join!(tee(stdout, tokio::io::stdout()), tee(stderr, tokio::io::stderr()))
            .map_err(io_err)?;
    let status = child.wait().await.map_err(io_err)?;

    Ok(ProcessOutput { status: status.code(), stdout, stderr })
}

/// Copy lines from `reader` to `sink` as they arrive, returning everything read.
async fn tee<R, W>(reader: R, mut sink: W) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut captured = String::new();
    while let Some(line) = lines.next_line().await? {
        sink.write_all(line.as_bytes()).await?;
        sink.write_all(b"\n").await?;
        sink.flush().await?;
        captured.push_str(&line);
        captured.push('\n');
    }
    Ok(captured)
}

#[cfg(unix)]
mod pty {
    use crate::subprocess::{CommandSpec, ProcessError, ProcessOutput};
    use nix::pty::{openpty, Winsize};
    use nix::sys::termios::Termios;
    use std::fs::File;
    use std::io::{Read, Write};
    use std::process::{Command, Stdio};

    /// Linux reports EIO on the master once the last slave handle closes.
    const EIO: i32 = 5;

    pub(super) fn run(cmd: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
        let io_err = |source| ProcessError::Io { command: cmd.to_string(), source };

        let pair = openpty(None::<&Winsize>, None::<&Termios>)
            .map_err(|e| io_err(std::io::Error::from(e)))?;
        let slave_err = pair.slave.try_clone().map_err(io_err)?;

        let mut command = Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(pair.slave))
            .stderr(Stdio::from(slave_err));
        if let Some(ref dir) = cmd.cwd {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .map_err(|source| ProcessError::Spawn { command: cmd.to_string(), source })?;
        // Release our copies of the slave so the master sees EOF when the child exits
        drop(command);

        let mut master = File::from(pair.master);
        let mut stdout = std::io::stdout();
        let mut captured = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match master.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    // Best-effort echo; the child keeps running and output is still captured
                    let _ = stdout.write_all(&buf[..n]);
                    let _ = stdout.flush();
                    captured.extend_from_slice(&buf[..n]);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) if e.raw_os_error() == Some(EIO) => break,
                Err(e) => return Err(io_err(e)),
            }
        }

        let status = child.wait().map_err(io_err)?;
        Ok(ProcessOutput {
            status: status.code(),
            stdout: String::from_utf8_lossy(&captured).into_owned(),
            stderr: String::new(),
        })
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
