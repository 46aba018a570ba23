// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod types;
pub mod error;
pub mod reconcilers;
pub mod resources;
pub mod kubernetes;
pub mod config;
pub mod constants;

#[cfg(test)]
pub mod test_utils;
