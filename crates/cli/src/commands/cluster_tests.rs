// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;

#[derive(Parser)]
struct CreateCli {
    #[command(flatten)]
    args: CreateArgs,
}

#[derive(Parser)]
struct StopCli {
    #[command(flatten)]
    args: StopArgs,
}

#[test]
fn create_defaults() {
    let options = CreateCli::try_parse_from(["create"]).unwrap().args.options();
    assert_eq!(options.name.as_str(), "local");
    assert_eq!(options.node_image(), "kindest/node:v1.16.15");
    assert!(!options.ingress);
}

#[test]
fn create_overrides() {
    let cli = CreateCli::try_parse_from([
        "create",
        "--name",
        "demo",
        "--image",
        "example/node",
        "--version",
        "v1.29.0",
        "--ingress",
    ])
    .unwrap();
    let options = cli.args.options();
    assert_eq!(options.name.as_str(), "demo");
    assert_eq!(options.node_image(), "example/node:v1.29.0");
    assert!(options.ingress);
}

#[yare::parameterized(
    path_separator = { "a/b" },
    parent         = { ".." },
    empty          = { "" },
    space          = { "my cluster" },
    uppercase      = { "Demo" },
    lock_suffix    = { "x.lock" },
    double_dot     = { "a..b" },
)]
fn invalid_name_is_a_usage_error(name: &str) {
    let err = CreateCli::try_parse_from(["create", "--name", name]).err().unwrap();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn stop_keeps_nodes_by_default() {
    let cli = StopCli::try_parse_from(["stop", "--name", "demo"]).unwrap();
    assert_eq!(cli.args.name.as_str(), "demo");
    assert!(!cli.args.delete_nodes);

    let cli = StopCli::try_parse_from(["stop", "--delete-nodes"]).unwrap();
    assert!(cli.args.delete_nodes);
}
