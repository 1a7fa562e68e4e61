// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! condo - local Kubernetes development clusters on kind

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::cluster::{CreateArgs, GetArgs, StopArgs};

#[derive(Parser)]
#[command(name = "condo", version = env::VERSION, styles = color::styles())]
#[command(about = "Create and tear down local kind clusters with GitOps tooling")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config.json with the deploy and helm repositories
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },
    /// Stop resources
    Stop {
        #[command(subcommand)]
        resource: StopResource,
    },
    /// Show resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}

#[derive(Subcommand)]
enum CreateResource {
    /// Create a kind cluster with registry, git server, database and flux
    Cluster(CreateArgs),
}

#[derive(Subcommand)]
enum StopResource {
    /// Stop a cluster's sidecars, optionally deleting its nodes
    Cluster(StopArgs),
}

#[derive(Subcommand)]
enum GetResource {
    /// Show a cluster's lifecycle state
    Cluster(GetArgs),
}

/// Resolved locations shared by all commands.
pub struct Settings {
    pub clusters_dir: PathBuf,
    pub config_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(exit_error::exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings =
        Settings { clusters_dir: env::clusters_dir()?, config_path: env::config_path(cli.config) };
    tracing::debug!(
        clusters_dir = %settings.clusters_dir.display(),
        config = %settings.config_path.display(),
        "resolved settings"
    );

    // Every step awaits its child process; one thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(async {
        match cli.command {
            Command::Create { resource: CreateResource::Cluster(args) } => {
                commands::cluster::create(args, &settings).await
            }
            Command::Stop { resource: StopResource::Cluster(args) } => {
                commands::cluster::stop(args, &settings).await
            }
            Command::Get { resource: GetResource::Cluster(args) } => {
                commands::cluster::get(args, &settings).await
            }
        }
    })
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
