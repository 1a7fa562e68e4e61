// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sidecar container definitions.
//!
//! Sidecars are long-running containers started next to the kind cluster
//! and attached to its docker network: a git server that serves the
//! workspace repositories, a local image registry and a database.

use crate::Workspace;
use std::path::PathBuf;

/// Docker network kind creates for its nodes.
pub const KIND_NETWORK: &str = "kind";

pub const GIT_SERVER: &str = "git-server";
pub const REGISTRY: &str = "docker-image-reg";
pub const DATABASE: &str = "mongo-container";

/// Container restart policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    No,
    Always,
}

crate::simple_display! {
    RestartPolicy {
        No => "no",
        Always => "always",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMapping {
    pub host: u16,
    pub container: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeMount {
    pub host: PathBuf,
    pub container: String,
}

/// A sidecar container: fixed image, ports and mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarSpec {
    pub name: &'static str,
    pub image: &'static str,
    pub port: PortMapping,
    pub restart: RestartPolicy,
    pub volumes: Vec<VolumeMount>,
}

impl SidecarSpec {
    /// Git server serving the workspace over ssh on host port 2222.
    ///
    /// Mounts the workspace as the repository root and `.ssh` as the
    /// authorized keys directory.
    pub fn git_server(workspace: &Workspace) -> Self {
        Self {
            name: GIT_SERVER,
            image: "jkarlos/git-server-docker",
            port: PortMapping { host: 2222, container: 22 },
            restart: RestartPolicy::No,
            volumes: vec![
                VolumeMount {
                    host: workspace.root().to_path_buf(),
                    container: "/git-server/repos".to_string(),
                },
                VolumeMount { host: workspace.ssh_dir(), container: "/git-server/keys".to_string() },
            ],
        }
    }

    pub fn registry() -> Self {
        Self {
            name: REGISTRY,
            image: "registry:2",
            port: PortMapping { host: 5000, container: 5000 },
            restart: RestartPolicy::Always,
            volumes: Vec::new(),
        }
    }

    pub fn database() -> Self {
        Self {
            name: DATABASE,
            image: "mongo",
            port: PortMapping { host: 27017, container: 27017 },
            restart: RestartPolicy::Always,
            volumes: Vec::new(),
        }
    }

    /// All sidecars in start order.
    pub fn all(workspace: &Workspace) -> Vec<Self> {
        vec![Self::git_server(workspace), Self::registry(), Self::database()]
    }

    /// Arguments for `docker run`.
    pub fn run_args(&self) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            format!("-p{}:{}", self.port.host, self.port.container),
            "--pull=missing".to_string(),
            format!("--name={}", self.name),
        ];
        if self.restart != RestartPolicy::No {
            args.push(format!("--restart={}", self.restart));
        }
        for volume in &self.volumes {
            args.push(format!("-v{}:{}", volume.host.display(), volume.container));
        }
        args.push(self.image.to_string());
        args
    }
}

#[cfg(test)]
#[path = "sidecar_tests.rs"]
mod tests;
