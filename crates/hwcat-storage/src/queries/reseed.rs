// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog write statements.
//!
//! Every function takes a plain `&Connection` so callers can run them on a
//! `rusqlite::Transaction` (which derefs to one) inside a single
//! `Database::connection().call(..)` closure. None of them commit.

use hwcat_core::{CpuSpecs, GpuSpecs, SourceType};
use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{CatalogCounts, NewComponent};

/// Delete every catalog row, children first.
pub fn clear_catalog(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "DELETE FROM prices;
         DELETE FROM component_sources;
         DELETE FROM cpu_specs;
         DELETE FROM gpu_specs;
         DELETE FROM components;
         DELETE FROM sources;
         DELETE FROM manufacturers;",
    )
}

/// Insert a manufacturer, returning its id. Existing names are reused.
pub fn insert_manufacturer(conn: &Connection, name: &str, website: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO manufacturers (name, website) VALUES (?1, ?2)
         ON CONFLICT(name) DO NOTHING",
        params![name, website],
    )?;
    conn.query_row(
        "SELECT id FROM manufacturers WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )
}

/// Insert a component row, returning its id.
pub fn insert_component(conn: &Connection, component: &NewComponent) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO components (external_id, type, model, manufacturer_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            component.external_id,
            component.kind.to_string(),
            component.model,
            component.manufacturer_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_cpu_specs(
    conn: &Connection,
    component_id: i64,
    specs: &CpuSpecs,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO cpu_specs (
            component_id, cores, threads, base_clock_ghz, boost_clock_ghz, tdp_watts, socket
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            component_id,
            specs.cores,
            specs.threads,
            specs.base_clock_ghz,
            specs.boost_clock_ghz,
            specs.tdp_watts,
            specs.socket,
        ],
    )?;
    Ok(())
}

pub fn insert_gpu_specs(
    conn: &Connection,
    component_id: i64,
    specs: &GpuSpecs,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO gpu_specs (
            component_id, memory_gb, memory_type, core_clock_mhz, boost_clock_mhz, tdp_watts, interface
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            component_id,
            specs.memory_gb,
            specs.memory_type,
            specs.core_clock_mhz,
            specs.boost_clock_mhz,
            specs.tdp_watts,
            specs.interface,
        ],
    )?;
    Ok(())
}

/// Insert a source unless the same URL is already cited for `source_type`.
///
/// One page cited for two types yields two rows, so each row's `type`
/// matches what the URL was validated for. Returns the source id and whether
/// a new row was created.
pub fn upsert_source(
    conn: &Connection,
    url: &str,
    domain: &str,
    source_type: SourceType,
) -> rusqlite::Result<(i64, bool)> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM sources WHERE url = ?1 AND type = ?2",
            params![url, source_type.to_string()],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok((id, false));
    }

    conn.execute(
        "INSERT INTO sources (url, domain, type) VALUES (?1, ?2, ?3)",
        params![url, domain, source_type.to_string()],
    )?;
    Ok((conn.last_insert_rowid(), true))
}

/// Link a source to a component. Returns `false` if the link already existed.
pub fn link_source(
    conn: &Connection,
    component_id: i64,
    source_id: i64,
    verified_at: &str,
) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO component_sources (component_id, source_id, verified_at)
         VALUES (?1, ?2, ?3)",
        params![component_id, source_id, verified_at],
    )?;
    Ok(changed == 1)
}

/// Record a price observation backed by a `price_availability` source.
pub fn insert_price(
    conn: &Connection,
    component_id: i64,
    source_id: i64,
    price_eur: f64,
    recorded_at: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO prices (component_id, source_id, price_eur, recorded_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![component_id, source_id, price_eur, recorded_at],
    )?;
    Ok(())
}

/// Count the rows of every catalog table.
pub fn count_rows(conn: &Connection) -> rusqlite::Result<CatalogCounts> {
    let count = |table: &str| -> rusqlite::Result<u64> {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|n| n.max(0) as u64)
    };

    Ok(CatalogCounts {
        manufacturers: count("manufacturers")?,
        components: count("components")?,
        cpu_specs: count("cpu_specs")?,
        gpu_specs: count("gpu_specs")?,
        sources: count("sources")?,
        component_sources: count("component_sources")?,
        prices: count("prices")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use hwcat_core::ComponentKind;

    fn cpu(external_id: &str, manufacturer_id: i64) -> NewComponent {
        NewComponent {
            external_id: external_id.to_string(),
            kind: ComponentKind::Cpu,
            model: "Core i5-14600K".to_string(),
            manufacturer_id,
        }
    }

    #[tokio::test]
    async fn insert_and_count() {
        let db = Database::open_in_memory().await.unwrap();
        let counts = db
            .connection()
            .call(|conn| -> rusqlite::Result<CatalogCounts> {
                let tx = conn.transaction()?;
                let intel = insert_manufacturer(&tx, "Intel", "https://www.intel.com")?;
                assert_eq!(insert_manufacturer(&tx, "Intel", "https://www.intel.com")?, intel);

                let id = insert_component(&tx, &cpu("cpu-intel-i5-14600k", intel))?;
                insert_cpu_specs(&tx, id, &CpuSpecs::default())?;

                let url = "https://ark.intel.com/x";
                let (source, created) = upsert_source(&tx, url, "intel.com", SourceType::CpuSpecs)?;
                assert!(created);
                assert_eq!(
                    upsert_source(&tx, url, "intel.com", SourceType::CpuSpecs)?,
                    (source, false)
                );
                assert!(link_source(&tx, id, source, "2025-01-26T00:00:00Z")?);
                assert!(!link_source(&tx, id, source, "2025-01-26T00:00:00Z")?);
                tx.commit()?;
                count_rows(conn)
            })
            .await
            .unwrap();

        assert_eq!(counts.manufacturers, 1);
        assert_eq!(counts.components, 1);
        assert_eq!(counts.cpu_specs, 1);
        assert_eq!(counts.sources, 1);
        assert_eq!(counts.component_sources, 1);
        assert_eq!(counts.prices, 0);
    }

    #[tokio::test]
    async fn same_url_gets_one_row_per_type() {
        let db = Database::open_in_memory().await.unwrap();
        let (cpu_specs, gpu_specs, again) = db
            .connection()
            .call(|conn| -> rusqlite::Result<(i64, i64, (i64, bool))> {
                let url = "https://www.amd.com/en/products/specifications.html";
                let (a, _) = upsert_source(conn, url, "amd.com", SourceType::CpuSpecs)?;
                let (b, created) = upsert_source(conn, url, "amd.com", SourceType::GpuSpecs)?;
                assert!(created);
                let again = upsert_source(conn, url, "amd.com", SourceType::CpuSpecs)?;
                Ok((a, b, again))
            })
            .await
            .unwrap();
        assert_ne!(cpu_specs, gpu_specs);
        assert_eq!(again, (cpu_specs, false));
    }

    #[tokio::test]
    async fn null_specs_stay_null() {
        let db = Database::open_in_memory().await.unwrap();
        let nulls: i64 = db
            .connection()
            .call(|conn| -> rusqlite::Result<i64> {
                let m = insert_manufacturer(conn, "Intel", "https://www.intel.com")?;
                let id = insert_component(conn, &cpu("c1", m))?;
                insert_cpu_specs(conn, id, &CpuSpecs::default())?;
                conn.query_row(
                    "SELECT COUNT(*) FROM cpu_specs WHERE cores IS NULL AND socket IS NULL",
                    [],
                    |row| row.get(0),
                )
            })
            .await
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[tokio::test]
    async fn price_requires_price_source() {
        let db = Database::open_in_memory().await.unwrap();
        let result = db
            .connection()
            .call(|conn| -> rusqlite::Result<()> {
                let m = insert_manufacturer(conn, "Intel", "https://www.intel.com")?;
                let id = insert_component(conn, &cpu("c1", m))?;
                let (specs, _) =
                    upsert_source(conn, "https://ark.intel.com/x", "intel.com", SourceType::CpuSpecs)?;
                insert_price(conn, id, specs, 300.0, "2026-01-01T00:00:00Z")
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn specs_must_match_component_kind() {
        let db = Database::open_in_memory().await.unwrap();
        let result = db
            .connection()
            .call(|conn| -> rusqlite::Result<()> {
                let m = insert_manufacturer(conn, "Intel", "https://www.intel.com")?;
                let id = insert_component(conn, &cpu("c1", m))?;
                insert_gpu_specs(conn, id, &GpuSpecs::default())
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let db = Database::open_in_memory().await.unwrap();
        let counts = db
            .connection()
            .call(|conn| -> rusqlite::Result<CatalogCounts> {
                let m = insert_manufacturer(conn, "AMD", "https://www.amd.com")?;
                let id = insert_component(conn, &cpu("c1", m))?;
                insert_cpu_specs(conn, id, &CpuSpecs::default())?;
                let (price, _) = upsert_source(
                    conn,
                    "https://www.pccomponentes.com/x",
                    "pccomponentes.com",
                    SourceType::PriceAvailability,
                )?;
                insert_price(conn, id, price, 199.9, "2026-01-01T00:00:00Z")?;
                clear_catalog(conn)?;
                count_rows(conn)
            })
            .await
            .unwrap();
        assert!(counts.is_empty());
    }
}
