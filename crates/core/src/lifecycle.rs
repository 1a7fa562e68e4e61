// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace lifecycle state, derived fresh on every invocation.
//!
//! Nothing about a cluster's progress is persisted. The state is recomputed
//! from which workspace directories exist plus whether kind reports the
//! cluster as running. The filesystem is reached through [`WorkspaceProbe`]
//! so the derivation can be tested without touching disk.

use crate::{AuxRepo, Workspace};
use std::path::Path;

/// Read-only filesystem presence checks.
pub trait WorkspaceProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProbe;

impl WorkspaceProbe for LocalProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Lifecycle state of a cluster workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Workspace root does not exist
    Absent,
    /// Root exists but neither auxiliary repository has been fetched
    ConfigOnly,
    /// Only `deploy/` is present
    DeployConfigPresent,
    /// Only `helm/` is present
    HelmConfigPresent,
    /// Both auxiliary repositories are present, cluster not running
    Configured,
    /// kind reports the cluster as running
    Running,
}

crate::simple_display! {
    LifecycleState {
        Absent => "absent",
        ConfigOnly => "config-only",
        DeployConfigPresent => "deploy-config-present",
        HelmConfigPresent => "helm-config-present",
        Configured => "configured",
        Running => "running",
    }
}

impl LifecycleState {
    /// Auxiliary repositories that still need fetching in this state.
    pub fn missing_aux(&self) -> Vec<AuxRepo> {
        match self {
            LifecycleState::Absent | LifecycleState::ConfigOnly => {
                vec![AuxRepo::Deploy, AuxRepo::Helm]
            }
            LifecycleState::DeployConfigPresent => vec![AuxRepo::Helm],
            LifecycleState::HelmConfigPresent => vec![AuxRepo::Deploy],
            LifecycleState::Configured | LifecycleState::Running => Vec::new(),
        }
    }
}

/// Derive the lifecycle state of `workspace`.
///
/// `running` is the cluster tool's report and takes precedence over any
/// filesystem observation.
pub fn derive_state(
    probe: &impl WorkspaceProbe,
    workspace: &Workspace,
    running: bool,
) -> LifecycleState {
    if running {
        return LifecycleState::Running;
    }
    if !probe.exists(workspace.root()) {
        return LifecycleState::Absent;
    }
    let deploy = probe.exists(&workspace.path(AuxRepo::Deploy.folder()));
    let helm = probe.exists(&workspace.path(AuxRepo::Helm.folder()));
    match (deploy, helm) {
        (false, false) => LifecycleState::ConfigOnly,
        (true, false) => LifecycleState::DeployConfigPresent,
        (false, true) => LifecycleState::HelmConfigPresent,
        (true, true) => LifecycleState::Configured,
    }
}

#[cfg(any(test, feature = "test-support"))]
mod memory {
    use super::WorkspaceProbe;
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};

    /// In-memory probe: a path exists if it, or any path below it, was added.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryProbe {
        paths: BTreeSet<PathBuf>,
    }

    impl MemoryProbe {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, path: impl Into<PathBuf>) -> Self {
            self.paths.insert(path.into());
            self
        }
    }

    impl WorkspaceProbe for MemoryProbe {
        fn exists(&self, path: &Path) -> bool {
            self.paths.iter().any(|p| p.starts_with(path))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryProbe;

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
