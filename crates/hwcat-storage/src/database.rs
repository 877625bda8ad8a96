// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All statements are serialized through tokio-rusqlite's single background
//! thread. Do NOT open additional connections for writes.

use std::path::Path;
use std::time::Duration;

use hwcat_core::HwcatError;
use tracing::debug;

/// Handle to the catalog database.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path` and apply pending migrations.
    ///
    /// Missing parent directories are created.
    pub async fn open(path: &str) -> Result<Self, HwcatError> {
        if let Some(parent) = Path::new(path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).map_err(HwcatError::storage)?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(HwcatError::storage)?;
        let db = Self::init(conn).await?;
        debug!(path, "catalog database opened");
        Ok(db)
    }

    /// Open a private in-memory database with the full schema.
    pub async fn open_in_memory() -> Result<Self, HwcatError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(HwcatError::storage)?;
        Self::init(conn).await
    }

    async fn init(conn: tokio_rusqlite::Connection) -> Result<Self, HwcatError> {
        conn.call(|conn| -> Result<(), rusqlite::Error> {
            let mode: String =
                conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
            debug!(journal_mode = %mode, "journal mode set");
            conn.pragma_update(None, "foreign_keys", "ON")?;
            conn.pragma_update(None, "synchronous", "NORMAL")?;
            conn.busy_timeout(Duration::from_secs(5))?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        conn.call(|conn| -> Result<(), HwcatError> { crate::migrations::run_migrations(conn) })
            .await
            .map_err(flatten_call_err)?;

        Ok(Self { conn })
    }

    /// The underlying connection, for query modules and transactional callers.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), HwcatError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        self.conn.close().await.map_err(HwcatError::storage)?;
        debug!("catalog database closed");
        Ok(())
    }
}

/// Map a tokio-rusqlite error carrying a rusqlite error into [`HwcatError`].
pub fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> HwcatError {
    HwcatError::storage(e)
}

/// Unwrap a closure's own [`HwcatError`], mapping connection failures.
pub(crate) fn flatten_call_err(e: tokio_rusqlite::Error<HwcatError>) -> HwcatError {
    match e {
        tokio_rusqlite::Error::Error(inner) => inner,
        other => HwcatError::Storage {
            source: other.to_string().into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_schema_and_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();

        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> Result<Vec<String>, rusqlite::Error> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type IN ('table', 'view')
                     AND name NOT LIKE 'sqlite_%' ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect()
            })
            .await
            .unwrap();

        for expected in [
            "component_sources",
            "components",
            "cpu_specs",
            "gpu_specs",
            "manufacturers",
            "prices",
            "sources",
            "v_cpus_complete",
            "v_gpus_complete",
        ] {
            assert!(tables.iter().any(|t| t == expected), "missing {expected}");
        }
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = Database::open_in_memory().await.unwrap();
        let enabled: i64 = db
            .connection()
            .call(|conn| conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)))
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn reopen_does_not_rerun_migrations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let path = path.to_str().unwrap();

        Database::open(path).await.unwrap().close().await.unwrap();
        let db = Database::open(path).await.unwrap();
        let applied: i64 = db
            .connection()
            .call(|conn| {
                conn.query_row("SELECT COUNT(*) FROM refinery_schema_history", [], |row| {
                    row.get(0)
                })
            })
            .await
            .unwrap();
        assert_eq!(applied, 1);
        db.close().await.unwrap();
    }
}
