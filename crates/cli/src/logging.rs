// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup. Logs go to stderr so stdout stays clean for command output.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count and `CONDO_LOG` value.
///
/// An explicit `-v` wins over the environment.
pub fn directive(verbosity: u8, env: Option<String>) -> String {
    match (verbosity, env) {
        (0, Some(env)) => env,
        (0, None) => "info".to_string(),
        (1, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

pub fn init(verbosity: u8) {
    let directive = directive(verbosity, crate::env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("warning: ignoring invalid log filter '{}': {}", directive, e);
        EnvFilter::new("info")
    });
    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
