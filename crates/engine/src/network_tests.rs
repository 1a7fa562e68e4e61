// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{context, workspace};
use condo_adapters::ProcessOutput;
use condo_core::sidecar::GIT_SERVER;

fn write_template(ws: &Workspace, contents: &str) {
    let path = ws.git_service_template();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[tokio::test]
async fn renders_address_and_applies_via_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (ctx, runner) = context(dir.path());
    let ws = workspace(dir.path(), "demo");
    write_template(&ws, "subsets:\n  - addresses:\n      - ip: {{ . }}\n");
    runner.respond("docker network inspect", ProcessOutput::ok("172.18.0.5/16\n"));

    let address = apply_network_config(&ctx, &ws, GIT_SERVER).await.unwrap();

    assert_eq!(address, "172.18.0.5");
    let apply = &runner.calls()[1];
    assert_eq!(apply.to_string(), "kubectl apply --overwrite=true -f -");
    assert_eq!(apply.stdin.as_deref(), Some("subsets:\n  - addresses:\n      - ip: 172.18.0.5\n"));
}

#[tokio::test]
async fn default_template_renders() {
    let dir = tempfile::tempdir().unwrap();
    let (ctx, runner) = context(dir.path());
    let ws = workspace(dir.path(), "demo");
    crate::resolver::write_default_templates(&ws).unwrap();
    runner.respond("docker network inspect", ProcessOutput::ok("172.18.0.2/16"));

    apply_network_config(&ctx, &ws, GIT_SERVER).await.unwrap();

    let manifest = runner.calls()[1].stdin.clone().unwrap();
    assert!(manifest.contains("172.18.0.2"));
    assert!(!manifest.contains("{{"));
}

#[tokio::test]
async fn empty_address_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (ctx, runner) = context(dir.path());
    let ws = workspace(dir.path(), "demo");
    write_template(&ws, "ip: {{.}}\n");
    runner.respond("docker network inspect", ProcessOutput::ok("\n"));

    let err = apply_network_config(&ctx, &ws, GIT_SERVER).await.unwrap_err();

    assert!(matches!(err, EngineError::AddressNotFound(ref s) if s == "git-server"));
    assert_eq!(runner.count("kubectl"), 0);
}

#[tokio::test]
async fn unsupported_action_is_a_template_error() {
    let dir = tempfile::tempdir().unwrap();
    let (ctx, runner) = context(dir.path());
    let ws = workspace(dir.path(), "demo");
    write_template(&ws, "ip: {{ .Address }}\n");
    runner.respond("docker network inspect", ProcessOutput::ok("10.0.0.1/24"));

    let err = apply_network_config(&ctx, &ws, GIT_SERVER).await.unwrap_err();

    assert!(matches!(err, EngineError::Template { .. }));
    assert_eq!(runner.count("kubectl"), 0);
}

#[tokio::test]
async fn missing_template_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (ctx, runner) = context(dir.path());
    let ws = workspace(dir.path(), "demo");
    runner.respond("docker network inspect", ProcessOutput::ok("10.0.0.1/24"));

    let err = apply_network_config(&ctx, &ws, GIT_SERVER).await.unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
}
