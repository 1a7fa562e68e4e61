// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Starting and stopping sidecar containers.

use crate::step::{fatal, warning};
use crate::{ClusterContext, EngineError};
use condo_adapters::{ProcessRunner, ToolLocator};
use condo_core::{SidecarSpec, KIND_NETWORK};

/// Start `spec` and attach it to the kind network unless it is already running.
///
/// Returns whether a container was started.
pub async fn ensure_running<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    spec: &SidecarSpec,
) -> Result<bool, EngineError> {
    if ctx.docker.is_running(spec.name).await {
        tracing::info!(container = spec.name, "sidecar already running");
        return Ok(false);
    }

    tracing::info!(container = spec.name, image = spec.image, "starting sidecar");
    fatal(&format!("start {}", spec.name), ctx.docker.run(spec)).await?;
    fatal(
        &format!("connect {} to {} network", spec.name, KIND_NETWORK),
        ctx.docker.network_connect(KIND_NETWORK, spec.name),
    )
    .await?;
    Ok(true)
}

/// Stop and remove `spec`'s container. Failures are only logged.
pub async fn stop<R: ProcessRunner, L: ToolLocator>(ctx: &ClusterContext<R, L>, spec: &SidecarSpec) {
    tracing::info!(container = spec.name, "stopping sidecar");
    warning(&format!("stop {}", spec.name), ctx.docker.stop(spec.name)).await;
    warning(&format!("remove {}", spec.name), ctx.docker.remove(spec.name)).await;
}

#[cfg(test)]
#[path = "sidecar_tests.rs"]
mod tests;
