// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap construction and create-or-overwrite logic

use crate::constants::children;
use crate::error::{KappaError, Result};
use crate::resources::greeting::greet;
use crate::types::Kappa;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, Resource, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Build the desired ConfigMap for a Kappa
pub fn desired_config_map(kappa: &Kappa) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(kappa.config_map_name()),
            namespace: kappa.namespace(),
            owner_references: kappa.controller_owner_ref(&()).map(|oref| vec![oref]),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            children::GREETING_KEY.to_string(),
            greet(&kappa.name_any()),
        )])),
        ..Default::default()
    }
}

/// Create the ConfigMap owned by the given Kappa, or overwrite its data if it
/// already exists. The update path only replaces `data`; all other fields of
/// the live object, including its owner references, are left as found.
#[instrument(skip(client, kappa), fields(kappa = %kappa.name_any()))]
pub async fn upsert_config_map(client: &Client, kappa: &Kappa) -> Result<()> {
    let namespace = kappa
        .namespace()
        .ok_or_else(|| KappaError::MissingNamespace(kappa.name_any()))?;
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), &namespace);

    let name = kappa.config_map_name();
    let desired = desired_config_map(kappa);

    match config_maps.get_opt(&name).await? {
        Some(existing) => {
            debug!("ConfigMap {} exists, overwriting its data", name);
            let updated = ConfigMap {
                data: desired.data,
                ..existing
            };
            config_maps
                .replace(&name, &PostParams::default(), &updated)
                .await?;
        }
        None => {
            info!("Creating ConfigMap {}", name);
            config_maps.create(&PostParams::default(), &desired).await?;
        }
    }

    Ok(())
}
