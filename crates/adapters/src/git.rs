// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! git CLI wrapper. Every command runs in an explicit working directory.

use crate::subprocess::{CommandSpec, ProcessError, ProcessRunner};
use std::path::Path;

const GIT: &str = "git";

/// Typed `git` invocations.
#[derive(Clone)]
pub struct Git<R> {
    runner: R,
}

impl<R: ProcessRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `git clone --branch <branch> <url> <folder>` inside `cwd`.
    pub async fn clone_branch(
        &self,
        cwd: &Path,
        url: &str,
        branch: &str,
        folder: &str,
    ) -> Result<(), ProcessError> {
        self.run(cwd, ["clone", "--branch", branch, url, folder]).await
    }

    pub async fn init(&self, repo: &Path) -> Result<(), ProcessError> {
        self.run(repo, ["init"]).await
    }

    /// `git switch -c <branch>`
    pub async fn switch_create(&self, repo: &Path, branch: &str) -> Result<(), ProcessError> {
        self.run(repo, ["switch", "-c", branch]).await
    }

    pub async fn add_all(&self, repo: &Path) -> Result<(), ProcessError> {
        self.run(repo, ["add", "-A"]).await
    }

    pub async fn commit(&self, repo: &Path, message: &str) -> Result<(), ProcessError> {
        self.run(repo, ["commit", "-m", message]).await
    }

    async fn run<const N: usize>(&self, cwd: &Path, args: [&str; N]) -> Result<(), ProcessError> {
        let cmd = CommandSpec::new(GIT).args(args).current_dir(cwd);
        self.runner.run(&cmd).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
