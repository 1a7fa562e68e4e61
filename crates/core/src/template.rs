// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Embedded default cluster templates and single-address rendering.
//!
//! A fresh workspace is seeded with the files in [`DEFAULT_TEMPLATES`]. They
//! are plain files afterwards and may be edited per cluster.
//!
//! `git-service.yaml` carries exactly one `{{.}}` placeholder that receives
//! the git server's address on the kind network. Any other `{{ ... }}`
//! action is rejected rather than silently passed through to kubectl.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// A file written into `<root>/cluster/` on first creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTemplate {
    /// Path relative to the workspace root
    pub relative_path: &'static str,
    pub contents: &'static str,
}

pub const DEFAULT_TEMPLATES: &[DefaultTemplate] = &[
    DefaultTemplate {
        relative_path: "cluster/config.yaml",
        contents: include_str!("../templates/config.yaml"),
    },
    DefaultTemplate {
        relative_path: "cluster/git-service.yaml",
        contents: include_str!("../templates/git-service.yaml"),
    },
    DefaultTemplate {
        relative_path: "cluster/registry-configmap.yaml",
        contents: include_str!("../templates/registry-configmap.yaml"),
    },
];

/// Errors from template rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated action at byte {0}")]
    Unterminated(usize),
    #[error("unsupported action '{{{{{0}}}}}'")]
    UnsupportedAction(String),
    #[error("template has no '{{{{.}}}}' placeholder")]
    NoPlaceholder,
}

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ACTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(-?\s*[^}]*?\s*-?)\}\}").expect("constant regex pattern is valid"));

/// Substitute `address` for every `{{.}}` in `template`.
pub fn render_address(template: &str, address: &str) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len() + address.len());
    let mut last = 0;
    let mut substitutions = 0;

    for caps in ACTION_PATTERN.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        let action = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let inner = action.trim_matches(|c: char| c == '-' || c.is_whitespace());
        if inner != "." {
            return Err(TemplateError::UnsupportedAction(action.trim().to_string()));
        }
        let between = &template[last..whole.start()];
        if let Some(pos) = between.find("{{") {
            return Err(TemplateError::Unterminated(last + pos));
        }
        rendered.push_str(between);
        rendered.push_str(address);
        last = whole.end();
        substitutions += 1;
    }

    let tail = &template[last..];
    if let Some(pos) = tail.find("{{") {
        return Err(TemplateError::Unterminated(last + pos));
    }
    if substitutions == 0 {
        return Err(TemplateError::NoPlaceholder);
    }
    rendered.push_str(tail);
    Ok(rendered)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
