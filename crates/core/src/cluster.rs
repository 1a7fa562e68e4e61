// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster name and creation options.
//!
//! The cluster name keys everything: the workspace directory, the kind
//! cluster, the kube context and the branch that auxiliary repositories are
//! committed on. It is validated once at the edge so later path joins cannot
//! escape the clusters base directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default cluster name when `--name` is not given.
pub const DEFAULT_NAME: &str = "local";
/// Default kind node image.
pub const DEFAULT_IMAGE: &str = "kindest/node";
/// Default kind node image tag.
pub const DEFAULT_VERSION: &str = "v1.16.15";

/// Errors from cluster name validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("cluster name must not be empty")]
    Empty,
    #[error("cluster name '{0}' contains invalid character '{1}' (allowed: a-z, 0-9, '-', '.')")]
    InvalidChar(String, char),
    #[error("cluster name '{0}' must start with a lowercase letter or digit")]
    InvalidStart(String),
    #[error("cluster name '{0}' must not end with '.'")]
    TrailingDot(String),
    #[error("cluster name '{0}' must not contain '..'")]
    DoubleDot(String),
    #[error("cluster name '{0}' must not end with '.lock'")]
    LockSuffix(String),
}

/// Reserved for the per-cluster lock file next to the workspace roots.
pub const LOCK_SUFFIX: &str = ".lock";

/// Validated cluster name.
///
/// The name is used as a directory, a kind cluster name and a git branch,
/// so it must satisfy all three: lowercase ASCII alphanumerics, `-` and
/// `.`, starting with an alphanumeric, with no `..`, no trailing `.` and no
/// `.lock` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClusterName(String);

impl ClusterName {
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        let Some(first) = name.chars().next() else {
            return Err(NameError::Empty);
        };
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.')))
        {
            return Err(NameError::InvalidChar(name, c));
        }
        if !first.is_ascii_alphanumeric() {
            return Err(NameError::InvalidStart(name));
        }
        if name.contains("..") {
            return Err(NameError::DoubleDot(name));
        }
        if name.ends_with('.') {
            return Err(NameError::TrailingDot(name));
        }
        if name.ends_with(LOCK_SUFFIX) {
            return Err(NameError::LockSuffix(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Kube context that kind registers for this cluster.
    pub fn kube_context(&self) -> String {
        format!("kind-{}", self.0)
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClusterName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClusterName> for String {
    fn from(name: ClusterName) -> Self {
        name.0
    }
}

impl std::str::FromStr for ClusterName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Options for `create cluster`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterOptions {
    pub name: ClusterName,
    /// Node image repository (without tag)
    pub image: String,
    /// Node image tag
    pub version: String,
    /// Also apply the kind ingress-nginx manifest
    pub ingress: bool,
}

impl ClusterOptions {
    pub fn new(name: ClusterName) -> Self {
        Self {
            name,
            image: DEFAULT_IMAGE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            ingress: false,
        }
    }

    crate::setters! {
        into { image: String, version: String }
        set { ingress: bool }
    }

    /// Full node image reference passed to `kind create cluster --image`.
    pub fn node_image(&self) -> String {
        format!("{}:{}", self.image, self.version)
    }
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
