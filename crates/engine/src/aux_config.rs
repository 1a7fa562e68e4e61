// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fetching the auxiliary `deploy` and `helm` repositories.
//!
//! Each repository is cloned into the staging directory, detached from its
//! origin by dropping `.git`, moved into the workspace and re-initialised as
//! a fresh repository on a branch named after the cluster. The git sidecar
//! then serves it to flux.

use crate::step::fatal;
use crate::{ClusterContext, EngineError};
use condo_adapters::{ProcessRunner, ToolLocator};
use condo_core::{AuxConfig, AuxRepo, Workspace};

const INIT_COMMIT: &str = "INIT COMMIT";

/// Fetch `repos`, reading the auxiliary config only if there is work to do.
pub async fn fetch_missing<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    workspace: &Workspace,
    repos: &[AuxRepo],
) -> Result<(), EngineError> {
    if repos.is_empty() {
        tracing::debug!("auxiliary config present, nothing to fetch");
        return Ok(());
    }
    let config = AuxConfig::load(ctx.config_path())?;
    fetch(ctx, workspace, repos, &config).await
}

/// Fetch each of `repos` into the workspace.
///
/// The staging directory is removed whatever the outcome. If fetching
/// failed, that error is reported even when the cleanup also fails.
pub async fn fetch<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    workspace: &Workspace,
    repos: &[AuxRepo],
    config: &AuxConfig,
) -> Result<(), EngineError> {
    let staging = workspace.staging_dir();
    std::fs::create_dir_all(&staging).map_err(EngineError::io("create", &staging))?;

    let mut result = Ok(());
    for &repo in repos {
        result = fetch_one(ctx, workspace, repo, config).await;
        if result.is_err() {
            break;
        }
    }

    let cleanup = std::fs::remove_dir_all(&staging);
    match (result, cleanup) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(EngineError::io("remove", &staging)(e)),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(cleanup)) => {
            tracing::warn!(path = %staging.display(), error = %cleanup, "failed to remove staging directory");
            Err(e)
        }
    }
}

async fn fetch_one<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    workspace: &Workspace,
    repo: AuxRepo,
    config: &AuxConfig,
) -> Result<(), EngineError> {
    let folder = repo.folder();
    let target = workspace.path(folder);
    if target.exists() {
        return Err(EngineError::TargetExists(target));
    }

    let source = config.source(repo);
    let staging = workspace.staging_dir();
    tracing::info!(%repo, url = %source.url, branch = %source.branch, "fetching auxiliary config");

    ctx.git
        .clone_branch(&staging, &source.url, &source.branch, folder)
        .await
        .map_err(|e| EngineError::Clone { url: source.url.clone(), branch: source.branch.clone(), source: e })?;

    let cloned = staging.join(folder);
    let git_dir = cloned.join(".git");
    match std::fs::remove_dir_all(&git_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(EngineError::io("remove", &git_dir)(e)),
    }
    std::fs::rename(&cloned, &target).map_err(EngineError::io("move clone into", &target))?;

    let branch = workspace.name().as_str();
    fatal("git init", ctx.git.init(&target)).await?;
    fatal("git switch", ctx.git.switch_create(&target, branch)).await?;
    fatal("git add", ctx.git.add_all(&target)).await?;
    fatal("git commit", ctx.git.commit(&target, INIT_COMMIT)).await?;

    tracing::info!(%repo, path = %target.display(), branch, "auxiliary config ready");
    Ok(())
}

#[cfg(test)]
#[path = "aux_config_tests.rs"]
mod tests;
