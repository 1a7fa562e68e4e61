// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! kubectl CLI wrapper.

use crate::subprocess::{CommandSpec, ProcessError, ProcessRunner};
use std::path::Path;

const KUBECTL: &str = "kubectl";

/// Typed `kubectl` invocations against the current context.
#[derive(Clone)]
pub struct Kubectl<R> {
    runner: R,
}

impl<R: ProcessRunner> Kubectl<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `kubectl apply -f <source>`; `source` may be a file, directory or URL.
    pub async fn apply(&self, source: &str) -> Result<(), ProcessError> {
        self.run(CommandSpec::new(KUBECTL).args(["apply", "-f", source])).await
    }

    pub async fn apply_path(&self, path: &Path) -> Result<(), ProcessError> {
        self.apply(&path.display().to_string()).await
    }

    /// `kubectl apply --overwrite=true -f <path>`
    pub async fn apply_overwrite(&self, path: &Path) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(KUBECTL)
            .args(["apply", "--overwrite=true", "-f"])
            .arg(path.display().to_string());
        self.run(cmd).await
    }

    /// `kubectl apply --overwrite=true -f -` with `manifest` on stdin.
    pub async fn apply_stdin(&self, manifest: &str) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(KUBECTL).args(["apply", "--overwrite=true", "-f", "-"]).stdin(manifest);
        self.run(cmd).await
    }

    /// `kubectl create secret generic <name> --from-file=<file> --namespace=<ns>`
    pub async fn create_generic_secret(
        &self,
        name: &str,
        from_file: &Path,
        namespace: &str,
    ) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(KUBECTL)
            .args(["create", "secret", "generic", name])
            .arg(format!("--from-file={}", from_file.display()))
            .arg(format!("--namespace={}", namespace));
        self.run(cmd).await
    }

    /// Secrets matching `selector` in `namespace`, as YAML.
    pub async fn get_secrets_yaml(&self, namespace: &str, selector: &str) -> Result<String, ProcessError> {
        let cmd = CommandSpec::new(KUBECTL)
            .args(["get", "secret"])
            .arg(format!("--namespace={}", namespace))
            .args(["-l", selector, "--output=yaml"]);
        Ok(self.runner.run(&cmd).await?.stdout)
    }

    pub async fn cluster_info(&self, context: &str) -> Result<(), ProcessError> {
        self.run(CommandSpec::new(KUBECTL).args(["cluster-info", "--context", context])).await
    }

    async fn run(&self, cmd: CommandSpec) -> Result<(), ProcessError> {
        self.runner.run(&cmd).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "kubectl_tests.rs"]
mod tests;
