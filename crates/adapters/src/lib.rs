// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the external tools condo drives: docker, kind, kubectl,
//! helm and git. Every invocation goes through a [`ProcessRunner`] so the
//! engine can be exercised against a fake.

mod console;
pub mod docker;
pub mod git;
pub mod helm;
pub mod kind;
pub mod kubectl;
pub mod subprocess;
pub mod tools;

pub use docker::Docker;
pub use git::Git;
pub use helm::{Helm, ReleaseSpec};
pub use kind::Kind;
pub use kubectl::Kubectl;
pub use subprocess::{CommandSpec, ProcessError, ProcessOutput, ProcessRunner, SystemRunner};
pub use tools::{PathLocator, ToolError, ToolLocator, REQUIRED_TOOLS};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use subprocess::FakeProcessRunner;
#[cfg(any(test, feature = "test-support"))]
pub use tools::FakeToolLocator;
