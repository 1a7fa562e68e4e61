// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! docker CLI wrapper.

use crate::subprocess::{CommandSpec, ProcessError, ProcessOutput, ProcessRunner};
use condo_core::SidecarSpec;

const DOCKER: &str = "docker";

/// Typed `docker` invocations.
#[derive(Clone)]
pub struct Docker<R> {
    runner: R,
}

impl<R: ProcessRunner> Docker<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `docker ps`: succeeds only if the daemon is reachable.
    pub async fn ping(&self) -> Result<(), ProcessError> {
        self.runner.run(&docker(["ps"])).await.map(|_| ())
    }

    /// Whether container `name` exists and is running.
    ///
    /// Any inspect failure (typically "no such container") reads as not running.
    pub async fn is_running(&self, name: &str) -> bool {
        let cmd = docker(["container", "inspect", "-f", "{{.State.Running}}", name]);
        match self.runner.run(&cmd).await {
            Ok(out) => out.stdout.trim() == "true",
            Err(e) => {
                tracing::debug!(container = name, error = %e, "inspect failed, treating as not running");
                false
            }
        }
    }

    /// `docker run -d ...` for a sidecar.
    pub async fn run(&self, spec: &SidecarSpec) -> Result<ProcessOutput, ProcessError> {
        self.runner.run(&docker(spec.run_args())).await
    }

    pub async fn network_connect(&self, network: &str, container: &str) -> Result<(), ProcessError> {
        self.runner.run(&docker(["network", "connect", network, container])).await.map(|_| ())
    }

    pub async fn stop(&self, container: &str) -> Result<(), ProcessError> {
        self.runner.run(&docker(["stop", container])).await.map(|_| ())
    }

    pub async fn remove(&self, container: &str) -> Result<(), ProcessError> {
        self.runner.run(&docker(["rm", container])).await.map(|_| ())
    }

    /// IPv4 address of `container` on `network`, without the prefix length.
    ///
    /// Returns `None` when the container is not attached to the network.
    pub async fn network_address(
        &self,
        network: &str,
        container: &str,
    ) -> Result<Option<String>, ProcessError> {
        let format = format!(
            "{{{{range .Containers}}}}{{{{if eq .Name \"{}\"}}}}{{{{.IPv4Address}}}}{{{{end}}}}{{{{- end}}}}",
            container
        );
        let out = self.runner.run(&docker(["network", "inspect", network, "--format", &format])).await?;
        Ok(parse_address(&out.stdout))
    }
}

fn docker<I, S>(args: I) -> CommandSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CommandSpec::new(DOCKER).args(args)
}

/// `172.18.0.3/16` → `172.18.0.3`; blank → `None`.
fn parse_address(raw: &str) -> Option<String> {
    let address = raw.trim().split('/').next().unwrap_or_default().trim();
    if address.is_empty() {
        None
    } else {
        Some(address.to_string())
    }
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
