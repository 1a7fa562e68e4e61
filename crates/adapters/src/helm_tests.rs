// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::FakeProcessRunner;

fn flux() -> ReleaseSpec {
    ReleaseSpec {
        release: "flux".into(),
        chart: PathBuf::from("/w/demo/helm/fluxcd/flux"),
        namespace: "weave".into(),
        values: PathBuf::from("/w/demo/helm/.values/flux.yaml"),
        set: vec![("git.branch".into(), "demo".into()), ("git.label".into(), "flux-demo".into())],
    }
}

#[test]
fn upgrade_args_keep_set_order() {
    assert_eq!(
        flux().upgrade_args(),
        vec![
            "upgrade",
            "flux",
            "/w/demo/helm/fluxcd/flux",
            "--install",
            "--wait",
            "--namespace=weave",
            "--values=/w/demo/helm/.values/flux.yaml",
            "--set=git.branch=demo",
            "--set=git.label=flux-demo",
        ]
    );
}

#[test]
fn upgrade_args_without_overrides() {
    let spec = ReleaseSpec { set: Vec::new(), ..flux() };
    assert!(!spec.upgrade_args().iter().any(|a| a.starts_with("--set")));
}

#[tokio::test]
async fn upgrade_install_runs_helm() {
    let fake = FakeProcessRunner::new();
    Helm::new(fake.clone()).upgrade_install(&flux()).await.unwrap();
    let lines = fake.command_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("helm upgrade flux /w/demo/helm/fluxcd/flux --install --wait"));
}

#[tokio::test]
async fn upgrade_install_failure_propagates() {
    let fake = FakeProcessRunner::new();
    fake.fail("helm upgrade", "timed out waiting for the condition");
    let err = Helm::new(fake).upgrade_install(&flux()).await.unwrap_err();
    assert!(err.to_string().contains("timed out waiting"));
}
