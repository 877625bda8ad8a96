// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only catalog service consumed by presentation code.

use async_trait::async_trait;

use crate::error::HwcatError;
use crate::types::{CatalogEntry, ComponentKind};

/// Read-only lookup over the persisted catalog.
///
/// Implementations never write. Independent calls carry no ordering
/// guarantee relative to each other.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All entries of one kind, ordered by manufacturer name then model.
    async fn list_components(&self, kind: ComponentKind) -> Result<Vec<CatalogEntry>, HwcatError>;

    /// The entry of `kind` whose model slugifies to `slug`, if any.
    async fn get_component_by_slug(
        &self,
        kind: ComponentKind,
        slug: &str,
    ) -> Result<Option<CatalogEntry>, HwcatError>;

    async fn get_all_cpus(&self) -> Result<Vec<CatalogEntry>, HwcatError> {
        self.list_components(ComponentKind::Cpu).await
    }

    async fn get_all_gpus(&self) -> Result<Vec<CatalogEntry>, HwcatError> {
        self.list_components(ComponentKind::Gpu).await
    }

    async fn get_cpu_by_slug(&self, slug: &str) -> Result<Option<CatalogEntry>, HwcatError> {
        self.get_component_by_slug(ComponentKind::Cpu, slug).await
    }

    async fn get_gpu_by_slug(&self, slug: &str) -> Result<Option<CatalogEntry>, HwcatError> {
        self.get_component_by_slug(ComponentKind::Gpu, slug).await
    }
}
