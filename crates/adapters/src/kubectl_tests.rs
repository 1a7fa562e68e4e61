// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{FakeProcessRunner, ProcessOutput};

#[tokio::test]
async fn apply_stdin_passes_manifest() {
    let fake = FakeProcessRunner::new();
    Kubectl::new(fake.clone()).apply_stdin("kind: Service\n").await.unwrap();

    let call = &fake.calls()[0];
    assert_eq!(call.to_string(), "kubectl apply --overwrite=true -f -");
    assert_eq!(call.stdin.as_deref(), Some("kind: Service\n"));
}

#[tokio::test]
async fn apply_variants_command_lines() {
    let fake = FakeProcessRunner::new();
    let kubectl = Kubectl::new(fake.clone());

    kubectl.apply_path(Path::new("/w/demo/helm/.cluster")).await.unwrap();
    kubectl.apply_overwrite(Path::new("/w/demo/.secrets/sealed-secrets.yaml")).await.unwrap();
    kubectl.apply("https://example.com/deploy.yaml").await.unwrap();

    assert_eq!(
        fake.command_lines(),
        vec![
            "kubectl apply -f /w/demo/helm/.cluster",
            "kubectl apply --overwrite=true -f /w/demo/.secrets/sealed-secrets.yaml",
            "kubectl apply -f https://example.com/deploy.yaml",
        ]
    );
}

#[tokio::test]
async fn create_generic_secret_command_line() {
    let fake = FakeProcessRunner::new();
    Kubectl::new(fake.clone())
        .create_generic_secret("flux-git-deploy", Path::new("/w/demo/.ssh/identity"), "weave")
        .await
        .unwrap();
    assert_eq!(
        fake.command_lines(),
        vec!["kubectl create secret generic flux-git-deploy --from-file=/w/demo/.ssh/identity --namespace=weave"]
    );
}

#[tokio::test]
async fn get_secrets_yaml_returns_stdout() {
    let fake = FakeProcessRunner::new();
    fake.respond("kubectl get secret", ProcessOutput::ok("apiVersion: v1\nkind: List\n"));

    let yaml = Kubectl::new(fake.clone())
        .get_secrets_yaml("kube-system", "sealedsecrets.bitnami.com/sealed-secrets-key")
        .await
        .unwrap();

    assert_eq!(yaml, "apiVersion: v1\nkind: List\n");
    assert_eq!(
        fake.command_lines(),
        vec!["kubectl get secret --namespace=kube-system -l sealedsecrets.bitnami.com/sealed-secrets-key --output=yaml"]
    );
}

#[tokio::test]
async fn cluster_info_failure_propagates() {
    let fake = FakeProcessRunner::new();
    fake.fail("kubectl cluster-info", "context not found");
    let err = Kubectl::new(fake.clone()).cluster_info("kind-demo").await.unwrap_err();
    assert_eq!(err.stderr(), Some("context not found"));
    assert_eq!(fake.command_lines(), vec!["kubectl cluster-info --context kind-demo"]);
}
