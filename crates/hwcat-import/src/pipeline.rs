// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The transactional import pipeline.
//!
//! An import is a full reseed: the existing catalog is cleared and every
//! record is written inside one `BEGIN IMMEDIATE` transaction. Every cited
//! URL goes through [`SourceValidator::validate_strict`]; the first rejection
//! drops the transaction, so either the whole dataset lands or nothing does.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use hwcat_config::model::ImportConfig;
use hwcat_core::{Brand, ComponentKind, SourceType};
use hwcat_sources::SourceValidator;
use hwcat_storage::queries::reseed;
use hwcat_storage::{CatalogCounts, Database, NewComponent};
use rusqlite::{Connection, TransactionBehavior};
use tracing::{debug, error, info, warn};

use crate::dataset;
use crate::error::{ImportError, flatten_call_err};
use crate::record::SeedRecord;
use crate::report::{BrandBreakdown, ImportReport};
use crate::warnings::collect_warnings;

/// Run-time knobs for an import.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Verifications older than this produce a warning.
    pub max_verification_age: TimeDelta,
    /// Timestamp recorded on price rows and used for staleness checks.
    pub now: DateTime<Utc>,
}

impl ImportOptions {
    pub fn from_config(config: &ImportConfig) -> Self {
        Self {
            max_verification_age: TimeDelta::days(i64::from(config.max_verification_age_days)),
            now: Utc::now(),
        }
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::from_config(&ImportConfig::default())
    }
}

/// Materializes a curated dataset into the catalog database.
#[derive(Debug, Clone)]
pub struct ImportPipeline {
    validator: SourceValidator,
    options: ImportOptions,
}

impl ImportPipeline {
    pub fn new(validator: SourceValidator, options: ImportOptions) -> Self {
        Self { validator, options }
    }

    /// Replace the catalog in `db` with `records`.
    ///
    /// Structural problems are reported before the database is touched.
    /// Any rejected source aborts the run and leaves the previous catalog
    /// in place.
    pub async fn import_all(
        &self,
        db: &Database,
        records: &[SeedRecord],
    ) -> Result<ImportReport, ImportError> {
        dataset::ensure_well_formed(records)?;

        let warnings = collect_warnings(
            records,
            self.options.now,
            self.options.max_verification_age,
        );
        for warning in &warnings {
            warn!(record = %warning.record_id, kind = %warning.kind, "{}", warning.message);
        }

        info!(records = records.len(), "starting catalog import");
        let records = records.to_vec();
        let validator = self.validator.clone();
        let recorded_at = self.options.now;

        let outcome = db
            .connection()
            .call(move |conn| -> Result<(CatalogCounts, Vec<BrandBreakdown>), ImportError> {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
                reseed::clear_catalog(&tx)?;

                let mut writer = RecordWriter::new(&tx, &validator, recorded_at);
                for record in &records {
                    writer.write(record)?;
                }
                let breakdown = writer.breakdown();

                let counts = reseed::count_rows(&tx)?;
                tx.commit()?;
                Ok((counts, breakdown))
            })
            .await
            .map_err(flatten_call_err);

        match outcome {
            Ok((counts, breakdown)) => {
                info!(
                    components = counts.components,
                    sources = counts.sources,
                    prices = counts.prices,
                    warnings = warnings.len(),
                    "catalog import committed"
                );
                Ok(ImportReport {
                    recorded_at,
                    counts,
                    breakdown,
                    warnings,
                })
            }
            Err(e) => {
                error!(error = %e, "catalog import aborted, previous catalog kept");
                Err(e)
            }
        }
    }
}

/// Writes records on an open transaction, tracking manufacturers and counts.
struct RecordWriter<'a> {
    conn: &'a Connection,
    validator: &'a SourceValidator,
    recorded_at: String,
    manufacturers: HashMap<Brand, i64>,
    per_brand: BTreeMap<(Brand, ComponentKind), u64>,
}

impl<'a> RecordWriter<'a> {
    fn new(conn: &'a Connection, validator: &'a SourceValidator, recorded_at: DateTime<Utc>) -> Self {
        Self {
            conn,
            validator,
            recorded_at: recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            manufacturers: HashMap::new(),
            per_brand: BTreeMap::new(),
        }
    }

    fn manufacturer_id(&mut self, brand: Brand) -> Result<i64, ImportError> {
        if let Some(id) = self.manufacturers.get(&brand) {
            return Ok(*id);
        }
        let id = reseed::insert_manufacturer(self.conn, brand.name(), brand.website())?;
        self.manufacturers.insert(brand, id);
        Ok(id)
    }

    fn write(&mut self, record: &SeedRecord) -> Result<(), ImportError> {
        let manufacturer_id = self.manufacturer_id(record.brand())?;
        let component_id = reseed::insert_component(
            self.conn,
            &NewComponent {
                external_id: record.id().to_string(),
                kind: record.kind(),
                model: record.model().to_string(),
                manufacturer_id,
            },
        )?;

        match record {
            SeedRecord::Cpu(cpu) => reseed::insert_cpu_specs(self.conn, component_id, &cpu.specs)?,
            SeedRecord::Gpu(gpu) => reseed::insert_gpu_specs(self.conn, component_id, &gpu.specs)?,
        }

        let sources = record.sources();
        let verified_at = sources
            .last_verified
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let specs_source = self.cite(record, &sources.specs_url, sources.specs_type)?;
        reseed::link_source(self.conn, component_id, specs_source, &verified_at)?;

        if let Some(price_url) = &sources.price_url {
            let price_source = self.cite(record, price_url, SourceType::PriceAvailability)?;
            reseed::link_source(self.conn, component_id, price_source, &verified_at)?;
            if let Some(price_eur) = sources.price_eur {
                reseed::insert_price(
                    self.conn,
                    component_id,
                    price_source,
                    price_eur,
                    &self.recorded_at,
                )?;
            }
        }

        *self
            .per_brand
            .entry((record.brand(), record.kind()))
            .or_default() += 1;
        debug!(record = record.id(), component_id, "record imported");
        Ok(())
    }

    /// Validate `url` for `source_type` and store it, returning the source id.
    fn cite(
        &self,
        record: &SeedRecord,
        url: &str,
        source_type: SourceType,
    ) -> Result<i64, ImportError> {
        let validated = self
            .validator
            .validate_strict(url, Some(source_type))
            .map_err(|source| ImportError::SourceRejected {
                record_id: record.id().to_string(),
                source,
            })?;
        let (id, _) =
            reseed::upsert_source(self.conn, &validated.url, &validated.domain, source_type)?;
        Ok(id)
    }

    fn breakdown(&self) -> Vec<BrandBreakdown> {
        self.per_brand
            .iter()
            .map(|(&(brand, kind), &components)| BrandBreakdown {
                brand,
                kind,
                components,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_dataset;
    use hwcat_sources::{ErrorCode, SourceRegistry};
    use std::sync::Arc;

    fn pipeline() -> ImportPipeline {
        let options = ImportOptions {
            max_verification_age: TimeDelta::days(180),
            now: DateTime::parse_from_rfc3339("2025-02-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        ImportPipeline::new(
            SourceValidator::new(Arc::new(SourceRegistry::builtin())),
            options,
        )
    }

    #[tokio::test]
    async fn imports_builtin_seed() {
        let db = Database::open_in_memory().await.unwrap();
        let report = pipeline()
            .import_all(&db, &builtin_dataset().unwrap())
            .await
            .unwrap();

        assert_eq!(report.counts.manufacturers, 3);
        assert_eq!(report.counts.components, 12);
        assert_eq!(report.counts.cpu_specs, 6);
        assert_eq!(report.counts.gpu_specs, 6);
        assert_eq!(report.counts.sources, 24);
        assert_eq!(report.counts.component_sources, 24);
        assert_eq!(report.counts.prices, 12);
        assert_eq!(report.components_of(ComponentKind::Cpu), 6);
        assert!(report.warnings.is_empty());

        let amd_gpus = report
            .breakdown
            .iter()
            .find(|b| b.brand == Brand::Amd && b.kind == ComponentKind::Gpu)
            .unwrap();
        assert_eq!(amd_gpus.components, 3);
    }

    #[tokio::test]
    async fn wrong_source_type_aborts() {
        let db = Database::open_in_memory().await.unwrap();
        let mut records = builtin_dataset().unwrap();
        if let SeedRecord::Gpu(gpu) = &mut records[6] {
            // A retailer page cited as a spec sheet.
            gpu.sources.specs_url = "https://www.pccomponentes.com/nvidia-geforce-rtx-4060".into();
        }

        let err = pipeline().import_all(&db, &records).await.unwrap_err();
        match err {
            ImportError::SourceRejected { record_id, source } => {
                assert_eq!(record_id, "gpu-nvidia-rtx4060");
                assert_eq!(source.error_code, ErrorCode::SourceTypeNotAllowed);
            }
            other => panic!("unexpected error: {other}"),
        }
        let counts = hwcat_storage::queries::catalog::catalog_counts(&db).await.unwrap();
        assert!(counts.is_empty());
    }

    #[tokio::test]
    async fn malformed_dataset_never_reaches_the_database() {
        let db = Database::open_in_memory().await.unwrap();
        let mut records = builtin_dataset().unwrap();
        records[1] = records[0].clone();

        let err = pipeline().import_all(&db, &records).await.unwrap_err();
        assert!(matches!(err, ImportError::MalformedDataset { .. }));
    }

    #[tokio::test]
    async fn reimport_replaces_catalog() {
        let db = Database::open_in_memory().await.unwrap();
        let records = builtin_dataset().unwrap();
        pipeline().import_all(&db, &records).await.unwrap();
        let report = pipeline().import_all(&db, &records[..4]).await.unwrap();

        assert_eq!(report.counts.components, 4);
        assert_eq!(report.counts.manufacturers, 2);
    }
}
