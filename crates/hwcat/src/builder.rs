// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwcat build` command implementation.
//!
//! Pairs one CPU with one GPU and sums their current prices. The note only
//! names the CPU socket and the GPU interface; no compatibility analysis is
//! attempted.

use std::fmt;

use hwcat_config::HwcatConfig;
use hwcat_core::{CatalogEntry, ComponentKind};
use serde::Serialize;

use crate::catalog::{open_catalog, require_entry};
use crate::error::CliError;
use crate::output::{NOT_SPECIFIED, Output, eur};

/// A CPU + GPU pairing with its combined price.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub cpu: CatalogEntry,
    pub gpu: CatalogEntry,
    /// Sum of the known prices, `None` when neither part has one.
    pub total_price_eur: Option<f64>,
    /// True when only one of the two parts has a price.
    pub partial_price: bool,
    pub note: String,
}

impl BuildSummary {
    pub fn new(cpu: CatalogEntry, gpu: CatalogEntry) -> Self {
        let (total_price_eur, partial_price) = match (cpu.current_price_eur, gpu.current_price_eur) {
            (Some(a), Some(b)) => (Some(a + b), false),
            (Some(p), None) | (None, Some(p)) => (Some(p), true),
            (None, None) => (None, false),
        };
        let socket = cpu
            .cpu_specs()
            .and_then(|s| s.socket.as_deref())
            .unwrap_or(NOT_SPECIFIED);
        let interface = gpu
            .gpu_specs()
            .and_then(|s| s.interface.as_deref())
            .unwrap_or(NOT_SPECIFIED);
        let note = format!(
            "CPU socket: {socket}; GPU interface: {interface}. Check motherboard support for both."
        );
        Self {
            cpu,
            gpu,
            total_price_eur,
            partial_price,
            note,
        }
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in [&self.cpu, &self.gpu] {
            let price = part
                .current_price_eur
                .map(eur)
                .unwrap_or_else(|| "no price".to_string());
            writeln!(
                f,
                "{:<4} {} {:<28} {price:>12}",
                part.kind().label(),
                part.manufacturer_name,
                part.model
            )?;
        }
        match (self.total_price_eur, self.partial_price) {
            (Some(total), false) => writeln!(f, "Total {}", eur(total))?,
            (Some(total), true) => writeln!(f, "Total {} (partial: one part has no price)", eur(total))?,
            (None, _) => writeln!(f, "Total unavailable: no part has a price")?,
        }
        writeln!(f, "{}", self.note)
    }
}

/// Run the `hwcat build` command.
pub async fn run_build(
    config: &HwcatConfig,
    cpu_slug: &str,
    gpu_slug: &str,
    out: Output,
) -> Result<(), CliError> {
    let catalog = open_catalog(config).await?;
    let parts = async {
        let cpu = require_entry(&catalog, ComponentKind::Cpu, cpu_slug).await?;
        let gpu = require_entry(&catalog, ComponentKind::Gpu, gpu_slug).await?;
        Ok::<_, CliError>((cpu, gpu))
    }
    .await;
    catalog.close().await?;
    let (cpu, gpu) = parts?;

    let summary = BuildSummary::new(cpu, gpu);
    if out.is_json() {
        out.json(&summary)
    } else {
        print!("{summary}");
        Ok(())
    }
}
