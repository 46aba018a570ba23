// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types served by this operator.

pub mod kappa;

pub use kappa::{Kappa, KappaSpec, KappaStatus};
