// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! kind CLI wrapper.

use crate::subprocess::{CommandSpec, ProcessError, ProcessRunner};
use condo_core::ClusterName;
use std::path::Path;

const KIND: &str = "kind";

/// Typed `kind` invocations.
#[derive(Clone)]
pub struct Kind<R> {
    runner: R,
}

impl<R: ProcessRunner> Kind<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Names reported by `kind get clusters`.
    pub async fn clusters(&self) -> Result<Vec<String>, ProcessError> {
        let out = self.runner.run(&CommandSpec::new(KIND).args(["get", "clusters"])).await?;
        Ok(out.stdout.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }

    pub async fn is_running(&self, name: &ClusterName) -> Result<bool, ProcessError> {
        Ok(self.clusters().await?.iter().any(|c| c == name.as_str()))
    }

    /// `kind create cluster`, streamed to the terminal.
    pub async fn create_cluster(
        &self,
        name: &ClusterName,
        node_image: &str,
        config: &Path,
    ) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(KIND)
            .args(["create", "cluster"])
            .arg(format!("--image={}", node_image))
            .arg(format!("--name={}", name))
            .arg(format!("--config={}", config.display()))
            .streamed();
        self.runner.run(&cmd).await.map(|_| ())
    }

    pub async fn delete_cluster(&self, name: &ClusterName) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(KIND).args(["delete", "cluster"]).arg(format!("--name={}", name));
        self.runner.run(&cmd).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
