// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret construction and create-if-absent logic

use crate::constants::children;
use crate::error::{KappaError, Result};
use crate::resources::greeting::greet;
use crate::types::Kappa;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, Resource, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Build the desired Secret for a Kappa
pub fn desired_secret(kappa: &Kappa) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(kappa.secret_name()),
            namespace: kappa.namespace(),
            owner_references: kappa.controller_owner_ref(&()).map(|oref| vec![oref]),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            children::GREETING_KEY.to_string(),
            ByteString(greet(&kappa.name_any()).into_bytes()),
        )])),
        ..Default::default()
    }
}

/// Create the Secret owned by the given Kappa if it does not already exist.
/// An existing Secret is never updated, whoever owns it.
#[instrument(skip(client, kappa), fields(kappa = %kappa.name_any()))]
pub async fn create_secret_if_absent(client: &Client, kappa: &Kappa) -> Result<()> {
    let namespace = kappa
        .namespace()
        .ok_or_else(|| KappaError::MissingNamespace(kappa.name_any()))?;
    let secrets: Api<Secret> = Api::namespaced(client.clone(), &namespace);

    let name = kappa.secret_name();
    let desired = desired_secret(kappa);

    match secrets.create(&PostParams::default(), &desired).await {
        Ok(_) => {
            info!("Created Secret {}", name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            debug!("Secret {} already exists, leaving it as is", name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
