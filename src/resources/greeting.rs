// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Greeting text carried by a Kappa's child objects

/// Compute the greeting for a Kappa name
pub fn greet(name: &str) -> String {
    if name.is_empty() {
        "Hello!".to_string()
    } else {
        format!("Hello, {}", name)
    }
}
