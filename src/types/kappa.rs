// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

use crate::constants::children;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "caproven.info", version = "v1", kind = "Kappa")]
#[kube(namespaced)]
#[kube(status = "KappaStatus")]
#[serde(rename_all = "camelCase")]
pub struct KappaSpec {
    #[serde(default)]
    pub has_cucumber: bool,
}

impl Kappa {
    /// Get the name of the ConfigMap owned by this Kappa
    pub fn config_map_name(&self) -> String {
        format!("{}-{}", self.name_any(), children::CONFIG_MAP_SUFFIX)
    }

    /// Get the name of the Secret owned by this Kappa
    pub fn secret_name(&self) -> String {
        format!("{}-{}", self.name_any(), children::SECRET_SUFFIX)
    }

    /// Check whether this Kappa is a registered owner of the given object
    pub fn owns<K: ResourceExt>(&self, obj: &K) -> bool {
        self.uid()
            .is_some_and(|uid| obj.owner_references().iter().any(|oref| oref.uid == uid))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KappaStatus {
    #[serde(default)]
    pub has_cucumber: bool,
}
