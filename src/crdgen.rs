// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kappa_operator::types::Kappa;
use kube::CustomResourceExt;

/// Print the Kappa CRD manifest as YAML, for piping into kubectl apply
fn main() {
    match serde_yaml::to_string(&Kappa::crd()) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Failed to serialize Kappa CRD: {}", e);
            std::process::exit(1);
        }
    }
}
