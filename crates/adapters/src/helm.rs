// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! helm CLI wrapper.

use crate::subprocess::{CommandSpec, ProcessError, ProcessRunner};
use std::path::PathBuf;

const HELM: &str = "helm";

/// A chart release to install or upgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSpec {
    pub release: String,
    /// Local chart directory
    pub chart: PathBuf,
    pub namespace: String,
    pub values: PathBuf,
    /// `--set key=value` overrides, in order
    pub set: Vec<(String, String)>,
}

impl ReleaseSpec {
    /// Arguments for `helm`.
    pub fn upgrade_args(&self) -> Vec<String> {
        let mut args = vec![
            "upgrade".to_string(),
            self.release.clone(),
            self.chart.display().to_string(),
            "--install".to_string(),
            "--wait".to_string(),
            format!("--namespace={}", self.namespace),
            format!("--values={}", self.values.display()),
        ];
        args.extend(self.set.iter().map(|(k, v)| format!("--set={}={}", k, v)));
        args
    }
}

/// Typed `helm` invocations.
#[derive(Clone)]
pub struct Helm<R> {
    runner: R,
}

impl<R: ProcessRunner> Helm<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `helm upgrade <release> <chart> --install --wait ...`
    pub async fn upgrade_install(&self, spec: &ReleaseSpec) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(HELM).args(spec.upgrade_args());
        self.runner.run(&cmd).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "helm_tests.rs"]
mod tests;
