// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used as field manager for status patches
pub const OPERATOR_NAME: &str = "kappa-operator";

/// Naming and payload of the child objects owned by each Kappa
pub mod children {
    /// Suffix appended to the Kappa name for its ConfigMap
    pub const CONFIG_MAP_SUFFIX: &str = "config";
    /// Suffix appended to the Kappa name for its Secret
    pub const SECRET_SUFFIX: &str = "secret";
    /// The single data key carried by both child objects
    pub const GREETING_KEY: &str = "hello";
}

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for the CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
