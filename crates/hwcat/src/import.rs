// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwcat import` command implementation.
//!
//! Loads a dataset (the built-in seed unless `--dataset` is given), reseeds
//! the catalog database and prints the import report.

use std::path::Path;
use std::sync::Arc;

use hwcat_config::HwcatConfig;
use hwcat_import::{ImportOptions, ImportPipeline, ImportReport, SeedRecord};
use hwcat_sources::{SourceRegistry, SourceValidator};
use hwcat_storage::Database;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Load the dataset at `path`, or the built-in seed.
pub fn load_records(path: Option<&Path>) -> Result<Vec<SeedRecord>, CliError> {
    let records = match path {
        Some(path) => {
            info!(path = %path.display(), "loading dataset");
            hwcat_import::load_dataset(path)?
        }
        None => hwcat_import::builtin_dataset()?,
    };
    Ok(records)
}

/// Build the validator from the configured registry.
pub fn validator(config: &HwcatConfig) -> SourceValidator {
    SourceValidator::new(Arc::new(SourceRegistry::from_config(&config.sources)))
}

/// Run the import and return the committed report.
pub async fn import_catalog(
    config: &HwcatConfig,
    records: &[SeedRecord],
    options: ImportOptions,
) -> Result<ImportReport, CliError> {
    let pipeline = ImportPipeline::new(validator(config), options);
    let db = Database::open(&config.catalog.database_path).await?;
    let outcome = pipeline.import_all(&db, records).await;
    db.close().await?;
    Ok(outcome?)
}

/// Run the `hwcat import` command.
pub async fn run_import(
    config: &HwcatConfig,
    dataset: Option<&Path>,
    out: Output,
) -> Result<(), CliError> {
    let records = load_records(dataset)?;
    let options = ImportOptions::from_config(&config.import);
    let report = import_catalog(config, &records, options).await?;

    if out.is_json() {
        out.json(&report)?;
    } else {
        println!("Imported into {}", config.catalog.database_path);
        print!("{report}");
    }
    Ok(())
}
