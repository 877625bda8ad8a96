// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwcat list` and `hwcat show` command implementations.

use std::fmt::Write as _;
use std::path::Path;

use hwcat_config::HwcatConfig;
use hwcat_core::{CatalogEntry, CatalogReader, ComponentKind, HwcatError, SpecSheet};
use hwcat_storage::SqliteCatalog;

use crate::error::CliError;
use crate::output::{NOT_SPECIFIED, Output, eur, or_unspecified};

/// Open the catalog read service, refusing to create an empty database.
pub async fn open_catalog(config: &HwcatConfig) -> Result<SqliteCatalog, CliError> {
    let path = &config.catalog.database_path;
    if !Path::new(path).exists() {
        return Err(CliError::CatalogMissing { path: path.clone() });
    }
    Ok(SqliteCatalog::open(path).await?)
}

/// Look up one entry, failing with [`HwcatError::NotFound`] when absent.
pub async fn require_entry(
    catalog: &SqliteCatalog,
    kind: ComponentKind,
    slug: &str,
) -> Result<CatalogEntry, CliError> {
    catalog
        .get_component_by_slug(kind, slug)
        .await?
        .ok_or_else(|| {
            HwcatError::NotFound {
                kind: kind.to_string(),
                slug: slug.to_string(),
            }
            .into()
        })
}

/// Labelled spec values, with units, in display order.
pub fn spec_rows(specs: &SpecSheet) -> Vec<(&'static str, String)> {
    match specs {
        SpecSheet::Cpu(s) => vec![
            ("Cores", or_unspecified(s.cores, "")),
            ("Threads", or_unspecified(s.threads, "")),
            ("Base clock", or_unspecified(s.base_clock_ghz, "GHz")),
            ("Boost clock", or_unspecified(s.boost_clock_ghz, "GHz")),
            ("TDP", or_unspecified(s.tdp_watts, "W")),
            ("Socket", or_unspecified(s.socket.as_deref(), "")),
        ],
        SpecSheet::Gpu(s) => vec![
            ("Memory", or_unspecified(s.memory_gb, "GB")),
            ("Memory type", or_unspecified(s.memory_type.as_deref(), "")),
            ("Core clock", or_unspecified(s.core_clock_mhz, "MHz")),
            ("Boost clock", or_unspecified(s.boost_clock_mhz, "MHz")),
            ("TDP", or_unspecified(s.tdp_watts, "W")),
            ("Interface", or_unspecified(s.interface.as_deref(), "")),
        ],
    }
}

fn price(entry: &CatalogEntry) -> String {
    entry
        .current_price_eur
        .map(eur)
        .unwrap_or_else(|| "no price".to_string())
}

/// One line per entry: manufacturer, model, price and slug.
pub fn render_list(entries: &[CatalogEntry]) -> String {
    let mut buf = String::new();
    for entry in entries {
        let _ = writeln!(
            buf,
            "{:<8} {:<28} {:>12}  {}",
            entry.manufacturer_name,
            entry.model,
            price(entry),
            entry.slug
        );
    }
    buf
}

/// Full detail view of one entry, including provenance.
pub fn render_entry(entry: &CatalogEntry) -> String {
    let mut buf = String::new();
    let _ = writeln!(
        buf,
        "{} {} ({})",
        entry.manufacturer_name,
        entry.model,
        entry.kind().label()
    );
    let _ = writeln!(buf);
    for (label, value) in spec_rows(&entry.specs) {
        let _ = writeln!(buf, "  {label:<12} {value}");
    }
    let _ = writeln!(buf, "  {:<12} {}", "Price", price(entry));

    let _ = writeln!(buf);
    let _ = writeln!(buf, "Sources:");
    let _ = writeln!(
        buf,
        "  specs  {}",
        entry.spec_source_url.as_deref().unwrap_or(NOT_SPECIFIED)
    );
    if let Some(verified) = &entry.spec_verified_at {
        let _ = writeln!(buf, "         verified {verified}");
    }
    if let Some(url) = &entry.price_source_url {
        let _ = writeln!(buf, "  price  {url}");
        if let Some(recorded) = &entry.price_recorded_at {
            let _ = writeln!(buf, "         recorded {recorded}");
        }
    }
    buf
}

/// Run the `hwcat list` command.
pub async fn run_list(
    config: &HwcatConfig,
    kind: ComponentKind,
    out: Output,
) -> Result<(), CliError> {
    let catalog = open_catalog(config).await?;
    let entries = catalog.list_components(kind).await;
    catalog.close().await?;
    let entries = entries?;

    if out.is_json() {
        out.json(&entries)
    } else {
        print!("{}", render_list(&entries));
        Ok(())
    }
}

/// Run the `hwcat show` command.
pub async fn run_show(
    config: &HwcatConfig,
    kind: ComponentKind,
    slug: &str,
    out: Output,
) -> Result<(), CliError> {
    let catalog = open_catalog(config).await?;
    let entry = require_entry(&catalog, kind, slug).await;
    catalog.close().await?;
    let entry = entry?;

    if out.is_json() {
        out.json(&entry)
    } else {
        print!("{}", render_entry(&entry));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_config, temp_config};

    #[tokio::test]
    async fn missing_database_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);

        let err = open_catalog(&config).await.err().unwrap();
        assert!(matches!(err, CliError::CatalogMissing { .. }));
        assert!(!Path::new(&config.catalog.database_path).exists());
    }

    #[tokio::test]
    async fn lists_in_manufacturer_then_model_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(&dir).await;
        let catalog = open_catalog(&config).await.unwrap();

        let cpus = catalog.get_all_cpus().await.unwrap();
        let text = render_list(&cpus);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("AMD"), "{text}");
        assert_eq!(text.lines().count(), 6);
        catalog.close().await.unwrap();
    }

    #[tokio::test]
    async fn null_spec_renders_as_not_specified() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(&dir).await;
        let catalog = open_catalog(&config).await.unwrap();

        let gpu = require_entry(&catalog, ComponentKind::Gpu, "radeon-rx-7900-xtx")
            .await
            .unwrap();
        let text = render_entry(&gpu);
        assert!(text.contains("Core clock   not officially specified"), "{text}");
        assert!(text.contains("verified 2025-01-26T00:00:00Z"), "{text}");

        let err = require_entry(&catalog, ComponentKind::Cpu, "radeon-rx-7900-xtx")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "cpu not found: radeon-rx-7900-xtx");
        catalog.close().await.unwrap();
    }
}
