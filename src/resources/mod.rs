// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Construction and application of the child objects owned by a Kappa.

pub mod configmap;
pub mod greeting;
pub mod secret;

pub use configmap::{desired_config_map, upsert_config_map};
pub use greeting::greet;
pub use secret::{create_secret_if_absent, desired_secret};
