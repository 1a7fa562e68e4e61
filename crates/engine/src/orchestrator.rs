// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster create / stop / status flows.
//!
//! `create` is a strictly ordered, fail-fast pipeline. Nothing is rolled
//! back on failure: every step is idempotent or guarded by a presence
//! check, so recovery is simply running `create` again.

use crate::release::{self, install_or_upgrade};
use crate::resolver::{resolve, write_default_templates};
use crate::secrets::{ensure_flux_git_secret, ensure_key_pair, ensure_sealed_secret, KeyPairStatus};
use crate::step::{fatal, run_step, Severity};
use crate::{aux_config, network, sidecar};
use crate::{ClusterContext, ClusterLock, EngineError};
use condo_adapters::{ProcessRunner, ToolLocator, REQUIRED_TOOLS};
use condo_core::sidecar::GIT_SERVER;
use condo_core::{
    derive_state, AuxRepo, ClusterName, ClusterOptions, LifecycleState, LocalProbe, PipelineStage,
    SidecarSpec, Workspace,
};
use std::path::PathBuf;
use thiserror::Error;

/// kind-flavoured ingress-nginx deployment, applied with `--ingress`.
pub const INGRESS_MANIFEST: &str =
    "https://raw.githubusercontent.com/kubernetes/ingress-nginx/master/deploy/static/provider/kind/deploy.yaml";

/// Successful `create`.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub workspace: Workspace,
    pub stage: PipelineStage,
    /// Auxiliary repositories fetched by this run
    pub fetched: Vec<AuxRepo>,
    /// Default templates written by this run
    pub templates_written: Vec<PathBuf>,
    pub key_pair: KeyPairStatus,
    /// Sidecars started by this run (already-running ones are omitted)
    pub started: Vec<&'static str>,
}

/// Failed `create`, with the last stage that completed.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct CreateError {
    pub reached: PipelineStage,
    pub error: EngineError,
}

impl CreateError {
    pub fn stage(&self) -> PipelineStage {
        PipelineStage::Failed
    }
}

#[derive(Debug, Clone)]
pub struct StopReport {
    pub name: ClusterName,
    pub nodes_deleted: bool,
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub workspace: Workspace,
    pub state: LifecycleState,
}

/// Runs cluster operations against a [`ClusterContext`].
pub struct Orchestrator<R, L> {
    ctx: ClusterContext<R, L>,
}

impl<R: ProcessRunner, L: ToolLocator> Orchestrator<R, L> {
    pub fn new(ctx: ClusterContext<R, L>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClusterContext<R, L> {
        &self.ctx
    }

    /// Bring up a cluster and everything around it.
    pub async fn create(&self, options: &ClusterOptions) -> Result<CreateReport, CreateError> {
        let mut reached = PipelineStage::NotStarted;
        match self.create_stages(options, &mut reached).await {
            Ok(report) => Ok(report),
            Err(error) => {
                tracing::error!(name = %options.name, stage = %reached, error = %error, "create failed");
                Err(CreateError { reached, error })
            }
        }
    }

    async fn create_stages(
        &self,
        options: &ClusterOptions,
        reached: &mut PipelineStage,
    ) -> Result<CreateReport, EngineError> {
        let ctx = &self.ctx;
        let name = &options.name;
        tracing::info!(%name, image = %options.node_image(), "creating cluster");

        // Nothing may touch disk before this passes
        ctx.locator.require(&REQUIRED_TOOLS)?;
        fatal("check docker", ctx.docker.ping()).await?;
        *reached = PipelineStage::DependenciesChecked;

        let _lock = ClusterLock::acquire(ctx.base_dir(), name)?;

        let (workspace, existed) = resolve(ctx.base_dir(), name)?;
        let templates_written = write_default_templates(&workspace)?;
        *reached = PipelineStage::WorkspaceReady;

        let fetched = if existed {
            derive_state(&LocalProbe, &workspace, false).missing_aux()
        } else {
            vec![AuxRepo::Deploy, AuxRepo::Helm]
        };
        aux_config::fetch_missing(ctx, &workspace, &fetched).await?;
        *reached = PipelineStage::AuxConfigReady;

        if fatal("list kind clusters", ctx.kind.is_running(name)).await? {
            return Err(EngineError::AlreadyRunning(name.clone()));
        }
        fatal(
            "create kind cluster",
            ctx.kind.create_cluster(name, &options.node_image(), &workspace.cluster_config()),
        )
        .await?;
        fatal("check cluster", ctx.kubectl.cluster_info(&name.kube_context())).await?;
        *reached = PipelineStage::ClusterRunning;

        fatal("apply namespaces", ctx.kubectl.apply_path(&workspace.namespace_manifests())).await?;
        fatal("apply cluster manifests", ctx.kubectl.apply_path(&workspace.cluster_manifests())).await?;
        if options.ingress {
            fatal("apply ingress", ctx.kubectl.apply(INGRESS_MANIFEST)).await?;
        }
        *reached = PipelineStage::NetworkingApplied;

        // The git server mounts .ssh, so keys must exist before it starts
        let key_pair = ensure_key_pair(&workspace, ctx.key_bits())?;
        let mut started = Vec::new();
        for spec in SidecarSpec::all(&workspace) {
            if sidecar::ensure_running(ctx, &spec).await? {
                started.push(spec.name);
            }
        }
        network::apply_network_config(ctx, &workspace, GIT_SERVER).await?;
        fatal("apply registry config", ctx.kubectl.apply_path(&workspace.registry_configmap())).await?;
        *reached = PipelineStage::SidecarsReady;

        install_or_upgrade(ctx, &release::sealed_secrets(&workspace)).await?;
        ensure_sealed_secret(ctx, &workspace).await?;
        *reached = PipelineStage::SecretsReady;

        ensure_flux_git_secret(ctx, &workspace).await?;
        install_or_upgrade(ctx, &release::flux(&workspace)).await?;
        install_or_upgrade(ctx, &release::helm_operator(&workspace)).await?;
        *reached = PipelineStage::GitOpsInstalled;

        tracing::info!(
            %name,
            deploy = %workspace.deploy_dir().display(),
            "cluster ready, add deployments to the deploy folder"
        );
        Ok(CreateReport {
            workspace,
            stage: *reached,
            fetched,
            templates_written,
            key_pair,
            started,
        })
    }

    /// Stop the sidecars and, with `delete_nodes`, the kind cluster itself.
    ///
    /// Only an unreachable docker daemon is an error; everything else is a
    /// warning so stopping is always safe to repeat.
    pub async fn stop(&self, name: &ClusterName, delete_nodes: bool) -> Result<StopReport, EngineError> {
        let ctx = &self.ctx;
        tracing::info!(%name, delete_nodes, "stopping cluster");
        fatal("check docker", ctx.docker.ping()).await?;

        let workspace = Workspace::new(ctx.base_dir(), name.clone());
        for spec in SidecarSpec::all(&workspace) {
            sidecar::stop(ctx, &spec).await;
        }

        let nodes_deleted = if delete_nodes {
            run_step("delete kind cluster", Severity::Warning, ctx.kind.delete_cluster(name))
                .await?
                .is_some()
        } else {
            false
        };

        Ok(StopReport { name: name.clone(), nodes_deleted })
    }

    /// Report the lifecycle state of `name` without changing anything.
    pub async fn status(&self, name: &ClusterName) -> StatusReport {
        let workspace = Workspace::new(self.ctx.base_dir(), name.clone());
        let running = match self.ctx.kind.is_running(name).await {
            Ok(running) => running,
            Err(e) => {
                tracing::warn!(%name, error = %e, "could not query kind, assuming not running");
                false
            }
        };
        let state = derive_state(&LocalProbe, &workspace, running);
        StatusReport { workspace, state }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
