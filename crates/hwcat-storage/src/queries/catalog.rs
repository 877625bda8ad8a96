// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reads over the `v_cpus_complete` / `v_gpus_complete` views.

use hwcat_core::{
    CatalogEntry, ComponentKind, CpuSpecs, GpuSpecs, HwcatError, SpecSheet, slugify,
};
use rusqlite::Row;

use crate::database::Database;
use crate::models::CatalogCounts;

const COMMON_COLUMNS: &str = "id, external_id, model, manufacturer_name, manufacturer_website,
    current_price_eur, price_recorded_at, spec_source_url, spec_source_domain,
    spec_verified_at, price_source_url, price_source_domain";

const CPU_COLUMNS: &str = "cores, threads, base_clock_ghz, boost_clock_ghz, tdp_watts, socket";

const GPU_COLUMNS: &str =
    "memory_gb, memory_type, core_clock_mhz, boost_clock_mhz, tdp_watts, interface";

fn select_sql(kind: ComponentKind) -> String {
    let (view, spec_columns) = match kind {
        ComponentKind::Cpu => ("v_cpus_complete", CPU_COLUMNS),
        ComponentKind::Gpu => ("v_gpus_complete", GPU_COLUMNS),
    };
    format!(
        "SELECT {COMMON_COLUMNS}, {spec_columns} FROM {view} ORDER BY manufacturer_name, model"
    )
}

fn map_entry(row: &Row<'_>, kind: ComponentKind) -> rusqlite::Result<CatalogEntry> {
    let specs = match kind {
        ComponentKind::Cpu => SpecSheet::Cpu(CpuSpecs {
            cores: row.get(12)?,
            threads: row.get(13)?,
            base_clock_ghz: row.get(14)?,
            boost_clock_ghz: row.get(15)?,
            tdp_watts: row.get(16)?,
            socket: row.get(17)?,
        }),
        ComponentKind::Gpu => SpecSheet::Gpu(GpuSpecs {
            memory_gb: row.get(12)?,
            memory_type: row.get(13)?,
            core_clock_mhz: row.get(14)?,
            boost_clock_mhz: row.get(15)?,
            tdp_watts: row.get(16)?,
            interface: row.get(17)?,
        }),
    };

    let model: String = row.get(2)?;
    Ok(CatalogEntry {
        id: row.get(0)?,
        external_id: row.get(1)?,
        slug: slugify(&model),
        model,
        manufacturer_name: row.get(3)?,
        manufacturer_website: row.get(4)?,
        specs,
        current_price_eur: row.get(5)?,
        price_recorded_at: row.get(6)?,
        spec_source_url: row.get(7)?,
        spec_source_domain: row.get(8)?,
        spec_verified_at: row.get(9)?,
        price_source_url: row.get(10)?,
        price_source_domain: row.get(11)?,
    })
}

/// All complete entries of `kind`, ordered by manufacturer then model.
pub async fn list_entries(
    db: &Database,
    kind: ComponentKind,
) -> Result<Vec<CatalogEntry>, HwcatError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&select_sql(kind))?;
            let rows = stmt.query_map([], |row| map_entry(row, kind))?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// The complete entry of `kind` whose model slugifies to `slug`.
pub async fn find_entry_by_slug(
    db: &Database,
    kind: ComponentKind,
    slug: &str,
) -> Result<Option<CatalogEntry>, HwcatError> {
    let entries = list_entries(db, kind).await?;
    Ok(entries.into_iter().find(|entry| entry.slug == slug))
}

/// Row counts of every catalog table.
pub async fn catalog_counts(db: &Database) -> Result<CatalogCounts, HwcatError> {
    db.connection()
        .call(|conn| crate::queries::reseed::count_rows(conn))
        .await
        .map_err(crate::database::map_tr_err)
}
