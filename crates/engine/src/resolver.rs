// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping cluster names to workspaces on disk.

use crate::EngineError;
use condo_core::{AuxRepo, ClusterName, Workspace, DEFAULT_TEMPLATES};
use std::path::{Path, PathBuf};

/// Resolve the workspace for `name`, creating its root if needed.
///
/// Returns the workspace and whether its root already existed. Creating the
/// root is the only mutation.
pub fn resolve(base_dir: &Path, name: &ClusterName) -> Result<(Workspace, bool), EngineError> {
    let workspace = Workspace::new(base_dir, name.clone());
    let existed = workspace.root().is_dir();
    if !existed {
        std::fs::create_dir_all(workspace.root())
            .map_err(EngineError::io("create workspace", workspace.root()))?;
        tracing::info!(root = %workspace.root().display(), "created workspace");
    }
    Ok((workspace, existed))
}

/// Whether the auxiliary folder for `repo` is present.
pub fn config_present(workspace: &Workspace, repo: AuxRepo) -> bool {
    workspace.path(repo.folder()).is_dir()
}

/// Write each embedded default template that is not already on disk.
///
/// Existing files are left untouched so local edits survive re-runs.
/// Returns the paths written.
pub fn write_default_templates(workspace: &Workspace) -> Result<Vec<PathBuf>, EngineError> {
    let mut written = Vec::new();
    for template in DEFAULT_TEMPLATES {
        let path = workspace.path(template.relative_path);
        if path.exists() {
            tracing::debug!(path = %path.display(), "template exists, keeping");
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EngineError::io("create", parent))?;
        }
        std::fs::write(&path, template.contents).map_err(EngineError::io("write template", &path))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
