// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helm releases installed into every cluster.
//!
//! Charts and values come from the workspace's `helm/` repository. Each
//! release is given the cluster name so charts can label resources by
//! cluster.

use crate::step::fatal;
use crate::{ClusterContext, EngineError};
use condo_adapters::{ProcessRunner, ReleaseSpec, ToolLocator};
use condo_core::Workspace;

const KUBE_SYSTEM: &str = "kube-system";
const WEAVE: &str = "weave";

fn set(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

pub fn sealed_secrets(workspace: &Workspace) -> ReleaseSpec {
    ReleaseSpec {
        release: "sealed-secrets-controller".to_string(),
        chart: workspace.helm_dir().join("sealed-secrets"),
        namespace: KUBE_SYSTEM.to_string(),
        values: workspace.values_file("sealed-secrets.yaml"),
        set: vec![set("cluster.name", workspace.name().as_str())],
    }
}

/// flux watches the workspace's branch, labelled after the cluster.
pub fn flux(workspace: &Workspace) -> ReleaseSpec {
    let name = workspace.name().as_str();
    ReleaseSpec {
        release: "flux".to_string(),
        chart: workspace.helm_dir().join("fluxcd").join("flux"),
        namespace: WEAVE.to_string(),
        values: workspace.values_file("flux.yaml"),
        set: vec![set("git.branch", name), set("git.label", format!("flux-{}", name))],
    }
}

pub fn helm_operator(workspace: &Workspace) -> ReleaseSpec {
    ReleaseSpec {
        release: "flux-helm-operator".to_string(),
        chart: workspace.helm_dir().join("fluxcd").join("helm-operator"),
        namespace: WEAVE.to_string(),
        values: workspace.values_file("helm-operator.yaml"),
        set: vec![set("helm.versions", "v3"), set("cluster.name", workspace.name().as_str())],
    }
}

/// `helm upgrade --install --wait`; failure is fatal.
pub async fn install_or_upgrade<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    spec: &ReleaseSpec,
) -> Result<(), EngineError> {
    tracing::info!(release = %spec.release, namespace = %spec.namespace, "installing release");
    fatal(&format!("install {}", spec.release), ctx.helm.upgrade_install(spec)).await
}

#[cfg(test)]
#[path = "release_tests.rs"]
mod tests;
