// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::secrets::DEFAULT_KEY_BITS;
use condo_adapters::{Docker, Git, Helm, Kind, Kubectl, ProcessRunner, ToolLocator};
use condo_core::aux_config::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// Everything a cluster operation needs, threaded explicitly through every
/// step: tool wrappers sharing one runner, the workspace base directory and
/// the auxiliary config location.
#[derive(Clone)]
pub struct ClusterContext<R, L> {
    pub docker: Docker<R>,
    pub kind: Kind<R>,
    pub kubectl: Kubectl<R>,
    pub helm: Helm<R>,
    pub git: Git<R>,
    pub locator: L,
    base_dir: PathBuf,
    config_path: PathBuf,
    key_bits: usize,
}

impl<R: ProcessRunner, L: ToolLocator> ClusterContext<R, L> {
    pub fn new(runner: R, locator: L, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            docker: Docker::new(runner.clone()),
            kind: Kind::new(runner.clone()),
            kubectl: Kubectl::new(runner.clone()),
            helm: Helm::new(runner.clone()),
            git: Git::new(runner),
            locator,
            base_dir: base_dir.into(),
            config_path: PathBuf::from(CONFIG_FILE),
            key_bits: DEFAULT_KEY_BITS,
        }
    }

    /// Location of `config.json` (default: relative to the working directory).
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// RSA modulus size for generated key pairs.
    pub fn with_key_bits(mut self, bits: usize) -> Self {
        self.key_bits = bits;
        self
    }

    /// Directory holding one workspace per cluster name.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }
}
