// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! condo-engine: the cluster create/stop pipeline

pub mod aux_config;
mod context;
mod error;
mod lock;
pub mod network;
mod orchestrator;
pub mod release;
pub mod resolver;
pub mod secrets;
pub mod sidecar;
mod step;
#[cfg(test)]
mod test_support;

pub use context::ClusterContext;
pub use error::EngineError;
pub use lock::ClusterLock;
pub use orchestrator::{CreateError, CreateReport, Orchestrator, StatusReport, StopReport};
pub use secrets::{KeyPairStatus, DEFAULT_KEY_BITS};
pub use step::{run_step, Severity};
