// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-cluster service manifests that point at sidecars by address.

use crate::step::fatal;
use crate::{ClusterContext, EngineError};
use condo_adapters::{ProcessRunner, ToolLocator};
use condo_core::{render_address, Workspace, KIND_NETWORK};

/// Render `cluster/git-service.yaml` with `service`'s address on the kind
/// network and apply it. Returns the address used.
pub async fn apply_network_config<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    workspace: &Workspace,
    service: &str,
) -> Result<String, EngineError> {
    let address = fatal(
        &format!("look up {} address", service),
        ctx.docker.network_address(KIND_NETWORK, service),
    )
    .await?
    .ok_or_else(|| EngineError::AddressNotFound(service.to_string()))?;
    tracing::info!(service, %address, "found sidecar address");

    let path = workspace.git_service_template();
    let template = std::fs::read_to_string(&path).map_err(EngineError::io("read", &path))?;
    let manifest =
        render_address(&template, &address).map_err(|source| EngineError::Template { path, source })?;

    fatal(&format!("apply {} service", service), ctx.kubectl.apply_stdin(&manifest)).await?;
    Ok(address)
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
