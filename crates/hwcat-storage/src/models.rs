// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row types for catalog writes and table statistics.

use hwcat_core::ComponentKind;
use serde::Serialize;

/// A component row about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComponent {
    pub external_id: String,
    pub kind: ComponentKind,
    pub model: String,
    pub manufacturer_id: i64,
}

/// Row counts of every catalog table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub manufacturers: u64,
    pub components: u64,
    pub cpu_specs: u64,
    pub gpu_specs: u64,
    pub sources: u64,
    pub component_sources: u64,
    pub prices: u64,
}

impl CatalogCounts {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
