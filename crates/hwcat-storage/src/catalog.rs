// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the CatalogReader trait.

use async_trait::async_trait;
use tracing::debug;

use hwcat_core::{CatalogEntry, CatalogReader, ComponentKind, HwcatError};

use crate::database::Database;
use crate::queries;

/// Read-only catalog service over the complete views.
///
/// Wraps a [`Database`] handle and delegates to [`queries::catalog`].
pub struct SqliteCatalog {
    db: Database,
}

impl SqliteCatalog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the catalog database at `path`.
    pub async fn open(path: &str) -> Result<Self, HwcatError> {
        let db = Database::open(path).await?;
        debug!(path, "catalog read service ready");
        Ok(Self::new(db))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn close(self) -> Result<(), HwcatError> {
        self.db.close().await
    }
}

#[async_trait]
impl CatalogReader for SqliteCatalog {
    async fn list_components(&self, kind: ComponentKind) -> Result<Vec<CatalogEntry>, HwcatError> {
        queries::catalog::list_entries(&self.db, kind).await
    }

    async fn get_component_by_slug(
        &self,
        kind: ComponentKind,
        slug: &str,
    ) -> Result<Option<CatalogEntry>, HwcatError> {
        queries::catalog::find_entry_by_slug(&self.db, kind, slug).await
    }
}
