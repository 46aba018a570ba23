// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kappa reconciler - drives each Kappa's status and child objects to the desired state.

use crate::config::Config;
use crate::constants::OPERATOR_NAME;
use crate::error::{KappaError, Result};
use crate::resources::{create_secret_if_absent, upsert_config_map};
use crate::types::{Kappa, KappaStatus};
use futures::StreamExt;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{Patch, PatchParams},
    runtime::{controller::Action, Controller},
    Api, Client, Resource, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

pub struct KappaReconciler {
    client: Client,
    config: Config,
}

impl KappaReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let namespace = self.config.watch_namespace.clone();
        let kappas: Api<Kappa> = scoped_api(&self.client, namespace.as_deref());
        let config_maps: Api<ConfigMap> = scoped_api(&self.client, namespace.as_deref());
        let secrets: Api<Secret> = scoped_api(&self.client, namespace.as_deref());
        let context = Arc::new(self);

        Controller::new(kappas, WatcherConfig::default())
            .owns(config_maps, WatcherConfig::default())
            .owns(secrets, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled kappa: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

/// Build an Api scoped to a single namespace, or cluster-wide when none is given
fn scoped_api<K>(client: &Client, namespace: Option<&str>) -> Api<K>
where
    K: Resource<Scope = NamespaceResourceScope>,
    K::DynamicType: Default,
{
    match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    }
}

async fn reconcile(kappa: Arc<Kappa>, ctx: Arc<KappaReconciler>) -> Result<Action> {
    let name = kappa.name_any();
    let namespace = kappa
        .namespace()
        .ok_or_else(|| KappaError::MissingNamespace(name.clone()))?;

    debug!("Reconciling kappa: {}/{}", namespace, name);

    // Re-fetch so we act on the latest state, not the possibly stale watch event
    let kappas: Api<Kappa> = Api::namespaced(ctx.client.clone(), &namespace);
    let kappa = match kappas.get_opt(&name).await? {
        Some(kappa) => kappa,
        None => {
            debug!("Kappa {}/{} no longer exists, nothing to do", namespace, name);
            return Ok(Action::await_change());
        }
    };

    if kappa.metadata.deletion_timestamp.is_some() {
        debug!("Kappa {}/{} is being deleted, skipping", namespace, name);
        return Ok(Action::await_change());
    }

    update_status(&kappas, &kappa).await?;
    upsert_config_map(&ctx.client, &kappa).await?;
    create_secret_if_absent(&ctx.client, &kappa).await?;

    // Wait for the next change - the watcher will notify us when the kappa or one of its children changes
    Ok(Action::await_change())
}

/// Mark the Kappa as carrying a cucumber via the status subresource
async fn update_status(kappas: &Api<Kappa>, kappa: &Kappa) -> Result<()> {
    let status = KappaStatus { has_cucumber: true };

    kappas
        .patch_status(
            &kappa.name_any(),
            &PatchParams::apply(OPERATOR_NAME),
            &Patch::Merge(serde_json::json!({ "status": status })),
        )
        .await?;

    Ok(())
}

fn error_policy(_kappa: Arc<Kappa>, error: &KappaError, _ctx: Arc<KappaReconciler>) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(Duration::from_secs(60))
}
