// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for command tests.

use hwcat_config::HwcatConfig;
use hwcat_import::ImportOptions;

use crate::import::{import_catalog, load_records};

/// Default config pointing at a database inside `dir`.
pub fn temp_config(dir: &tempfile::TempDir) -> HwcatConfig {
    let mut config = HwcatConfig::default();
    config.catalog.database_path = dir
        .path()
        .join("catalog.db")
        .to_string_lossy()
        .into_owned();
    config
}

/// A config whose database already holds the built-in seed.
pub async fn seeded_config(dir: &tempfile::TempDir) -> HwcatConfig {
    let config = temp_config(dir);
    let records = load_records(None).unwrap();
    import_catalog(&config, &records, ImportOptions::default())
        .await
        .unwrap();
    config
}
