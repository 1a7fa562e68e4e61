// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-cluster advisory lock.

use crate::EngineError;
use condo_core::cluster::LOCK_SUFFIX;
use condo_core::ClusterName;
use fs2::FileExt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exclusive lock on `<base_dir>/<name>.lock`, held until dropped.
///
/// Cluster names cannot end in `.lock`, so lock files never collide with
/// workspace roots. The file outlives the lock; removing it would let two
/// processes hold locks on different inodes for the same name.
#[derive(Debug)]
pub struct ClusterLock {
    // Closing the file releases the lock
    _file: File,
    path: PathBuf,
}

impl ClusterLock {
    /// Take the lock without blocking; fails if another process holds it.
    pub fn acquire(base_dir: &Path, name: &ClusterName) -> Result<Self, EngineError> {
        std::fs::create_dir_all(base_dir).map_err(EngineError::io("create", base_dir))?;
        let path = base_dir.join(format!("{}{}", name, LOCK_SUFFIX));

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(EngineError::io("open lock file", &path))?;
        if let Err(source) = file.try_lock_exclusive() {
            return Err(EngineError::Locked { path, source });
        }

        // Record the holder (truncate now that we hold the lock)
        let mut file = file;
        file.set_len(0).map_err(EngineError::io("truncate lock file", &path))?;
        writeln!(file, "{}", std::process::id()).map_err(EngineError::io("write lock file", &path))?;

        tracing::debug!(path = %path.display(), "acquired cluster lock");
        Ok(Self { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
