// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-cluster workspace layout.
//!
//! A workspace is the directory `<base>/<cluster name>` holding everything
//! condo generates or fetches for one cluster:
//!
//! ```text
//! <root>/
//!   cluster/config.yaml             kind cluster config
//!   cluster/git-service.yaml        git-server Service/Endpoints template
//!   cluster/registry-configmap.yaml local registry hosting ConfigMap
//!   .ssh/identity, identity.pub     git-server / flux deploy key
//!   .secrets/sealed-secrets.yaml    archived sealed-secrets controller key
//!   deploy/                         auxiliary deploy repository
//!   helm/                           auxiliary helm repository (charts, values)
//!   tmp/                            staging area during auxiliary fetch
//! ```
//!
//! Only path arithmetic lives here; nothing touches the filesystem.

use crate::ClusterName;
use std::path::{Path, PathBuf};

pub const CLUSTER_DIR: &str = "cluster";
pub const SSH_DIR: &str = ".ssh";
pub const SECRETS_DIR: &str = ".secrets";
pub const STAGING_DIR: &str = "tmp";

/// Resolved workspace for one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    name: ClusterName,
    root: PathBuf,
}

impl Workspace {
    /// Workspace for `name` under `base`. Pure: the same inputs always give
    /// the same root.
    pub fn new(base: &Path, name: ClusterName) -> Self {
        let root = base.join(name.as_str());
        Self { name, root }
    }

    pub fn name(&self) -> &ClusterName {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file or folder relative to the root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn cluster_config(&self) -> PathBuf {
        self.root.join(CLUSTER_DIR).join("config.yaml")
    }

    pub fn git_service_template(&self) -> PathBuf {
        self.root.join(CLUSTER_DIR).join("git-service.yaml")
    }

    pub fn registry_configmap(&self) -> PathBuf {
        self.root.join(CLUSTER_DIR).join("registry-configmap.yaml")
    }

    pub fn ssh_dir(&self) -> PathBuf {
        self.root.join(SSH_DIR)
    }

    pub fn private_key(&self) -> PathBuf {
        self.ssh_dir().join("identity")
    }

    pub fn public_key(&self) -> PathBuf {
        self.ssh_dir().join("identity.pub")
    }

    pub fn sealed_secret_archive(&self) -> PathBuf {
        self.root.join(SECRETS_DIR).join("sealed-secrets.yaml")
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.root.join(STAGING_DIR)
    }

    /// Folder of the auxiliary helm repository.
    pub fn helm_dir(&self) -> PathBuf {
        self.root.join("helm")
    }

    pub fn deploy_dir(&self) -> PathBuf {
        self.root.join("deploy")
    }

    /// Cluster-wide manifests shipped in the helm repository.
    pub fn cluster_manifests(&self) -> PathBuf {
        self.helm_dir().join(".cluster")
    }

    pub fn namespace_manifests(&self) -> PathBuf {
        self.cluster_manifests().join("namespaces")
    }

    /// Release values file `helm/.values/<file>`.
    pub fn values_file(&self, file: &str) -> PathBuf {
        self.helm_dir().join(".values").join(file)
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
