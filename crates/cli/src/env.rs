// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use crate::exit_error::ExitError;
use std::path::PathBuf;

pub const CLUSTERS_DIR_VAR: &str = "CONDO_CLUSTERS_DIR";
pub const CONFIG_VAR: &str = "CONDO_CONFIG";
pub const LOG_VAR: &str = "CONDO_LOG";

/// Version string: package version plus the git hash it was built from
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Resolve the workspace base directory: CONDO_CLUSTERS_DIR > ~/.am/clusters
pub fn clusters_dir() -> Result<PathBuf, ExitError> {
    if let Some(dir) = std::env::var_os(CLUSTERS_DIR_VAR).filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or_else(|| {
        ExitError::usage(format!("cannot find home directory; set {}", CLUSTERS_DIR_VAR))
    })?;
    Ok(home.join(".am").join("clusters"))
}

/// Resolve the auxiliary config path: --config > CONDO_CONFIG > ./config.json
pub fn config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(CONFIG_VAR).filter(|s| !s.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(condo_core::aux_config::CONFIG_FILE))
}

/// Log filter directive from CONDO_LOG, if set
pub fn log_filter() -> Option<String> {
    std::env::var(LOG_VAR).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
