//! CLI help output specs

use crate::prelude::*;

#[test]
fn condo_no_args_is_a_usage_error() {
    cli().fails().code(2).stderr_has("Usage:");
}

#[test]
fn condo_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("create");
}

#[test]
fn condo_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn create_cluster_help_lists_flags() {
    cli()
        .args(&["create", "cluster", "--help"])
        .passes()
        .stdout_has("--name")
        .stdout_has("--image")
        .stdout_has("--version")
        .stdout_has("--ingress");
}

#[test]
fn stop_cluster_help_lists_delete_nodes() {
    cli().args(&["stop", "cluster", "--help"]).passes().stdout_has("--delete-nodes");
}
