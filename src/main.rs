// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};

use kappa_operator::config::Config;
use kappa_operator::kubernetes::wait_for_kappa_crd;
use kappa_operator::reconcilers::KappaReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Kappa operator");

    // Load configuration
    let config = Config::from_env()?;
    match &config.watch_namespace {
        Some(ns) => info!("Configuration loaded: watching namespace {}", ns),
        None => info!("Configuration loaded: watching all namespaces"),
    }

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // Wait for the Kappa CRD before starting the reconciler
    info!("Waiting for Kappa CRD to become available...");
    wait_for_kappa_crd(&client).await?;

    let reconciler = KappaReconciler::new(client, config);

    info!("Starting reconciler...");
    reconciler.run().await?;

    // This should never be reached as the reconciler runs forever
    warn!("Reconciler stopped unexpectedly");
    Ok(())
}
