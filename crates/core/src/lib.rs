// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! condo-core: domain types for the condo local cluster tool

pub mod macros;

pub mod aux_config;
pub mod cluster;
pub mod lifecycle;
pub mod sidecar;
pub mod stage;
pub mod template;
pub mod workspace;

pub use aux_config::{AuxConfig, AuxConfigError, AuxRepo, AuxSource};
pub use cluster::{ClusterName, ClusterOptions, NameError};
#[cfg(any(test, feature = "test-support"))]
pub use lifecycle::MemoryProbe;
pub use lifecycle::{derive_state, LifecycleState, LocalProbe, WorkspaceProbe};
pub use sidecar::{PortMapping, RestartPolicy, SidecarSpec, VolumeMount, KIND_NETWORK};
pub use stage::PipelineStage;
pub use template::{render_address, DefaultTemplate, TemplateError, DEFAULT_TEMPLATES};
pub use workspace::Workspace;
