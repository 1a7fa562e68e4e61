// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{context, name};
use std::path::Path;

fn ws() -> Workspace {
    Workspace::new(Path::new("/w"), name("demo"))
}

#[test]
fn sealed_secrets_release() {
    let spec = sealed_secrets(&ws());
    assert_eq!(spec.release, "sealed-secrets-controller");
    assert_eq!(spec.chart, Path::new("/w/demo/helm/sealed-secrets"));
    assert_eq!(spec.namespace, "kube-system");
    assert_eq!(spec.values, Path::new("/w/demo/helm/.values/sealed-secrets.yaml"));
}

#[test]
fn flux_release_tracks_cluster_branch() {
    let spec = flux(&ws());
    assert_eq!(spec.chart, Path::new("/w/demo/helm/fluxcd/flux"));
    assert_eq!(spec.namespace, "weave");
    assert_eq!(
        spec.set,
        vec![
            ("git.branch".to_string(), "demo".to_string()),
            ("git.label".to_string(), "flux-demo".to_string()),
        ]
    );
}

#[test]
fn helm_operator_release_uses_helm_v3() {
    let spec = helm_operator(&ws());
    assert_eq!(spec.release, "flux-helm-operator");
    assert_eq!(spec.chart, Path::new("/w/demo/helm/fluxcd/helm-operator"));
    assert_eq!(spec.values, Path::new("/w/demo/helm/.values/helm-operator.yaml"));
    assert!(spec.set.contains(&("helm.versions".to_string(), "v3".to_string())));
}

#[yare::parameterized(
    sealed   = { sealed_secrets },
    fluxcd   = { flux },
    operator = { helm_operator },
)]
fn every_release_carries_cluster_name(build: fn(&Workspace) -> ReleaseSpec) {
    let spec = build(&ws());
    assert!(spec.set.iter().any(|(_, v)| v.contains("demo")), "{:?}", spec.set);
}

#[tokio::test]
async fn install_failure_names_release() {
    let dir = tempfile::tempdir().unwrap();
    let (ctx, runner) = context(dir.path());
    runner.fail("helm upgrade flux ", "timed out");

    let err = install_or_upgrade(&ctx, &flux(&ws())).await.unwrap_err();
    assert!(err.to_string().starts_with("install flux:"));
}
