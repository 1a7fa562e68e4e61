//! `condo create|stop|get cluster` against an environment with no tools.

use crate::prelude::*;

#[test]
fn invalid_name_exits_with_usage_code() {
    let clusters = Clusters::empty();
    clusters.condo().args(&["create", "cluster", "--name", "a/b"]).fails().code(2);
}

#[test]
fn name_colliding_with_lock_file_is_rejected() {
    let clusters = Clusters::empty();
    clusters
        .condo()
        .args(&["create", "cluster", "--name", "foo.lock"])
        .fails()
        .code(2)
        .stderr_has(".lock");
}

/// Dependency check runs before anything touches disk.
#[test]
fn create_without_tools_fails_before_workspace_exists() {
    let clusters = Clusters::empty();
    clusters
        .condo()
        .args(&["create", "cluster", "--name", "demo"])
        .fails()
        .code(1)
        .stderr_has("required tools not found on PATH");

    assert!(!clusters.path().join("demo").exists());
    assert!(!clusters.path().join("demo.lock").exists());
}

#[test]
fn get_unknown_cluster_is_absent() {
    let clusters = Clusters::empty();
    clusters
        .condo()
        .args(&["get", "cluster", "--name", "demo"])
        .passes()
        .stdout_has("demo")
        .stdout_has("absent");

    assert!(!clusters.path().join("demo").exists());
}

#[test]
fn stop_without_docker_fails() {
    let clusters = Clusters::empty();
    clusters
        .condo()
        .args(&["stop", "cluster", "--name", "demo"])
        .fails()
        .code(1)
        .stderr_has("stop cluster 'demo' failed");
}
