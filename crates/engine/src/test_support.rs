// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for engine tests.

use crate::ClusterContext;
use condo_adapters::{FakeProcessRunner, FakeToolLocator};
use condo_core::{ClusterName, Workspace};
use std::path::{Path, PathBuf};

/// Small keys keep generation fast in debug builds.
pub const TEST_KEY_BITS: usize = 1024;

pub type TestContext = ClusterContext<FakeProcessRunner, FakeToolLocator>;

pub fn name(s: &str) -> ClusterName {
    ClusterName::new(s).unwrap()
}

/// Context rooted at `base` with a fake runner; returns the runner for
/// scripting and assertions.
pub fn context(base: &Path) -> (TestContext, FakeProcessRunner) {
    let runner = FakeProcessRunner::new();
    let ctx = ClusterContext::new(runner.clone(), FakeToolLocator::new(), base)
        .with_key_bits(TEST_KEY_BITS)
        .with_config_path(base.join("config.json"));
    (ctx, runner)
}

/// Workspace for `name` under `base` with its root created.
pub fn workspace(base: &Path, cluster: &str) -> Workspace {
    let ws = Workspace::new(base, name(cluster));
    std::fs::create_dir_all(ws.root()).unwrap();
    ws
}

/// Write a `config.json` pointing at example repositories.
pub fn write_config(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(
        path,
        r#"{
  "DEPLOY_CONFIG_GIT_REPO": "https://git.example/deploy.git",
  "DEPLOY_CONFIG_GIT_REPO_BRANCH": "main",
  "HELM_CONFIG_GIT_REPO": "https://git.example/helm.git",
  "HELM_CONFIG_GIT_REPO_BRANCH": "release"
}"#,
    )
    .unwrap();
    path.to_path_buf()
}

/// Make `git clone` create `<cwd>/<folder>/.git` and a file, like a real clone.
pub fn fake_clone(runner: &FakeProcessRunner) {
    runner.on("git clone", |cmd| {
        let cwd = cmd.cwd.clone().unwrap();
        let folder = cmd.args.last().unwrap();
        let repo = cwd.join(folder);
        std::fs::create_dir_all(repo.join(".git")).unwrap();
        std::fs::write(repo.join("README.md"), folder.as_bytes()).unwrap();
        condo_adapters::ProcessOutput::ok("")
    });
}
