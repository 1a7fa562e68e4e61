// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the external tools on `PATH`.

use std::path::PathBuf;
use thiserror::Error;

/// Tools every cluster operation shells out to.
pub const REQUIRED_TOOLS: [&str; 5] = ["kind", "git", "kubectl", "helm", "docker"];

/// Errors from tool discovery
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("required tools not found on PATH: {}", .0.join(", "))]
    Missing(Vec<String>),
}

/// Finds executables.
pub trait ToolLocator: Clone + Send + Sync + 'static {
    /// Full path of `tool`, if it can be found.
    fn locate(&self, tool: &str) -> Option<PathBuf>;

    /// Fail with every tool in `tools` that cannot be found.
    fn require(&self, tools: &[&str]) -> Result<(), ToolError> {
        let missing: Vec<String> = tools
            .iter()
            .filter(|tool| self.locate(tool).is_none())
            .map(|tool| tool.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ToolError::Missing(missing))
        }
    }
}

/// Searches the process `PATH`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        match which::which(tool) {
            Ok(path) => {
                tracing::debug!(tool, path = %path.display(), "found tool");
                Some(path)
            }
            Err(e) => {
                tracing::debug!(tool, error = %e, "tool not found");
                None
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::ToolLocator;
    use parking_lot::Mutex;
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Fake locator: every tool is present unless marked missing.
    #[derive(Clone, Default)]
    pub struct FakeToolLocator {
        missing: Arc<Mutex<BTreeSet<String>>>,
    }

    impl FakeToolLocator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Mark `tool` as absent from `PATH`.
        pub fn without(self, tool: &str) -> Self {
            self.missing.lock().insert(tool.to_string());
            self
        }
    }

    impl ToolLocator for FakeToolLocator {
        fn locate(&self, tool: &str) -> Option<PathBuf> {
            if self.missing.lock().contains(tool) {
                None
            } else {
                Some(PathBuf::from("/usr/local/bin").join(tool))
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeToolLocator;

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
