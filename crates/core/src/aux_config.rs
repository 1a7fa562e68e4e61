// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Auxiliary repository configuration (`config.json`).
//!
//! The file lives in the directory condo is run from, not in the workspace,
//! and names the two remote repositories every cluster workspace is seeded
//! from:
//!
//! ```json
//! {
//!   "DEPLOY_CONFIG_GIT_REPO": "https://example.com/deploy.git",
//!   "DEPLOY_CONFIG_GIT_REPO_BRANCH": "local",
//!   "HELM_CONFIG_GIT_REPO": "https://example.com/helm.git",
//!   "HELM_CONFIG_GIT_REPO_BRANCH": "local"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Errors from loading the auxiliary config
#[derive(Debug, Error)]
pub enum AuxConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The auxiliary repositories a workspace is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuxRepo {
    Deploy,
    Helm,
}

crate::simple_display! {
    AuxRepo {
        Deploy => "deploy",
        Helm => "helm",
    }
}

impl AuxRepo {
    /// Folder name under the workspace root.
    pub fn folder(&self) -> &'static str {
        match self {
            AuxRepo::Deploy => "deploy",
            AuxRepo::Helm => "helm",
        }
    }
}

/// Remote location of one auxiliary repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxSource {
    pub url: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxConfig {
    #[serde(rename = "DEPLOY_CONFIG_GIT_REPO")]
    pub deploy_repo: String,
    #[serde(rename = "DEPLOY_CONFIG_GIT_REPO_BRANCH")]
    pub deploy_branch: String,
    #[serde(rename = "HELM_CONFIG_GIT_REPO")]
    pub helm_repo: String,
    #[serde(rename = "HELM_CONFIG_GIT_REPO_BRANCH")]
    pub helm_branch: String,
}

impl AuxConfig {
    pub fn load(path: &Path) -> Result<Self, AuxConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| AuxConfigError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| AuxConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn source(&self, repo: AuxRepo) -> AuxSource {
        match repo {
            AuxRepo::Deploy => {
                AuxSource { url: self.deploy_repo.clone(), branch: self.deploy_branch.clone() }
            }
            AuxRepo::Helm => {
                AuxSource { url: self.helm_repo.clone(), branch: self.helm_branch.clone() }
            }
        }
    }
}

#[cfg(test)]
#[path = "aux_config_tests.rs"]
mod tests;
