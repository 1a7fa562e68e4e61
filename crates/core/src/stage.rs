// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stages of the `create` pipeline.

/// Progress marker for `create`. Stages only ever advance in declaration
/// order; any failure moves to [`PipelineStage::Failed`], which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    NotStarted,
    DependenciesChecked,
    WorkspaceReady,
    AuxConfigReady,
    ClusterRunning,
    NetworkingApplied,
    SidecarsReady,
    SecretsReady,
    GitOpsInstalled,
    Failed,
}

crate::simple_display! {
    PipelineStage {
        NotStarted => "not started",
        DependenciesChecked => "dependencies checked",
        WorkspaceReady => "workspace ready",
        AuxConfigReady => "auxiliary config ready",
        ClusterRunning => "cluster running",
        NetworkingApplied => "networking applied",
        SidecarsReady => "sidecars ready",
        SecretsReady => "secrets ready",
        GitOpsInstalled => "gitops installed",
        Failed => "failed",
    }
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::GitOpsInstalled | PipelineStage::Failed)
    }
}
