// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `condo create|stop|get cluster`

use anyhow::Result;
use clap::Args;
use condo_adapters::{PathLocator, SystemRunner};
use condo_core::cluster::{DEFAULT_IMAGE, DEFAULT_NAME, DEFAULT_VERSION};
use condo_core::{ClusterName, ClusterOptions};
use condo_engine::{ClusterContext, Orchestrator};

use crate::color;
use crate::exit_error::ExitError;
use crate::Settings;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Cluster name; also the workspace folder and git branch
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: ClusterName,

    /// Node image repository
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Node image tag (Kubernetes version)
    #[arg(long, default_value = DEFAULT_VERSION)]
    pub version: String,

    /// Also install the ingress-nginx controller
    #[arg(long)]
    pub ingress: bool,
}

impl CreateArgs {
    pub fn options(&self) -> ClusterOptions {
        ClusterOptions::new(self.name.clone())
            .image(self.image.clone())
            .version(self.version.clone())
            .ingress(self.ingress)
    }
}

#[derive(Args, Debug)]
pub struct StopArgs {
    /// Cluster name
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: ClusterName,

    /// Also delete the kind cluster nodes
    #[arg(long)]
    pub delete_nodes: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Cluster name
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: ClusterName,
}

fn orchestrator(settings: &Settings) -> Orchestrator<SystemRunner, PathLocator> {
    let ctx = ClusterContext::new(SystemRunner, PathLocator, &settings.clusters_dir)
        .with_config_path(&settings.config_path);
    Orchestrator::new(ctx)
}

pub async fn create(args: CreateArgs, settings: &Settings) -> Result<()> {
    let report = orchestrator(settings).create(&args.options()).await.map_err(|e| {
        ExitError::fatal(format!("create cluster '{}' failed after stage '{}': {}", args.name, e.reached, e.error))
    })?;

    println!("Cluster {} is ready", color::literal(report.workspace.name().as_str()));
    println!(
        "Add deployments in {}",
        color::context(&report.workspace.deploy_dir().display().to_string())
    );
    Ok(())
}

pub async fn stop(args: StopArgs, settings: &Settings) -> Result<()> {
    let report = orchestrator(settings)
        .stop(&args.name, args.delete_nodes)
        .await
        .map_err(|e| ExitError::fatal(format!("stop cluster '{}' failed: {}", args.name, e)))?;

    if report.nodes_deleted {
        println!("Cluster {} stopped and deleted", color::literal(report.name.as_str()));
    } else {
        println!("Cluster {} stopped", color::literal(report.name.as_str()));
    }
    Ok(())
}

pub async fn get(args: GetArgs, settings: &Settings) -> Result<()> {
    let report = orchestrator(settings).status(&args.name).await;
    println!(
        "{}\t{}\t{}",
        color::literal(args.name.as_str()),
        color::state(report.state),
        color::context(&report.workspace.root().display().to_string())
    );
    Ok(())
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
