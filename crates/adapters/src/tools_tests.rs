// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_locator_finds_everything_by_default() {
    let locator = FakeToolLocator::new();
    assert!(locator.require(&REQUIRED_TOOLS).is_ok());
    assert_eq!(locator.locate("kind"), Some(PathBuf::from("/usr/local/bin/kind")));
}

#[test]
fn require_reports_all_missing_tools_in_order() {
    let locator = FakeToolLocator::new().without("helm").without("kind");
    let err = locator.require(&REQUIRED_TOOLS).unwrap_err();
    assert_eq!(err, ToolError::Missing(vec!["kind".into(), "helm".into()]));
    assert_eq!(err.to_string(), "required tools not found on PATH: kind, helm");
}

#[test]
fn path_locator_finds_shell() {
    assert!(PathLocator.locate("sh").is_some());
}

#[test]
fn path_locator_misses_unknown_binary() {
    assert!(PathLocator.locate("condo-definitely-not-a-binary").is_none());
}
