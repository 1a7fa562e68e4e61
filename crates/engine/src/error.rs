// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use condo_adapters::{ProcessError, ToolError};
use condo_core::{AuxConfigError, ClusterName, TemplateError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a cluster operation
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    MissingTools(#[from] ToolError),

    #[error("{step}: {source}")]
    Step {
        step: String,
        #[source]
        source: ProcessError,
    },

    #[error("{context} {}: {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] AuxConfigError),

    #[error("failed to clone {url} (branch {branch}); verify git is installed and git credentials are configured: {source}")]
    Clone {
        url: String,
        branch: String,
        #[source]
        source: ProcessError,
    },

    #[error("refusing to overwrite existing {}", .0.display())]
    TargetExists(PathBuf),

    #[error("cluster '{0}' is already running")]
    AlreadyRunning(ClusterName),

    #[error("network address not found for '{0}'")]
    AddressNotFound(String),

    #[error("invalid template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("key generation failed: {0}")]
    KeyGen(String),

    #[error("another condo process holds {}", path.display())]
    Locked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| EngineError::Io { context, path, source }
    }
}
