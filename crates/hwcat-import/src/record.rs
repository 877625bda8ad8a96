// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Curated seed records, one variant per component kind.

use std::path::Path;

use chrono::{DateTime, Utc};
use hwcat_core::{Brand, ComponentKind, CpuSpecs, GpuSpecs, SourceType, slugify};
use serde::{Deserialize, Serialize};

use crate::dataset::RecordIssue;
use crate::error::ImportError;

/// A curated component record as fed to the import pipeline.
///
/// Serialized with a `"type": "CPU" | "GPU"` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeedRecord {
    #[serde(rename = "CPU")]
    Cpu(CpuRecord),
    #[serde(rename = "GPU")]
    Gpu(GpuRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuRecord {
    pub id: String,
    pub brand: Brand,
    pub model: String,
    pub specs: CpuSpecs,
    pub sources: SourceRefs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuRecord {
    pub id: String,
    pub brand: Brand,
    pub model: String,
    pub specs: GpuSpecs,
    pub sources: SourceRefs,
}

/// Provenance of a record: where its specs and price come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRefs {
    pub specs_url: String,
    /// The type the specs URL is cited for; must match the record kind.
    pub specs_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_eur: Option<f64>,
    pub last_verified: DateTime<Utc>,
    /// Explanation for spec fields left null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SeedRecord {
    pub fn id(&self) -> &str {
        match self {
            SeedRecord::Cpu(r) => &r.id,
            SeedRecord::Gpu(r) => &r.id,
        }
    }

    pub fn brand(&self) -> Brand {
        match self {
            SeedRecord::Cpu(r) => r.brand,
            SeedRecord::Gpu(r) => r.brand,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            SeedRecord::Cpu(r) => &r.model,
            SeedRecord::Gpu(r) => &r.model,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            SeedRecord::Cpu(_) => ComponentKind::Cpu,
            SeedRecord::Gpu(_) => ComponentKind::Gpu,
        }
    }

    pub fn sources(&self) -> &SourceRefs {
        match self {
            SeedRecord::Cpu(r) => &r.sources,
            SeedRecord::Gpu(r) => &r.sources,
        }
    }

    pub fn slug(&self) -> String {
        slugify(self.model())
    }

    /// Spec fields with no officially published value.
    pub fn null_fields(&self) -> Vec<&'static str> {
        match self {
            SeedRecord::Cpu(r) => r.specs.null_fields(),
            SeedRecord::Gpu(r) => r.specs.null_fields(),
        }
    }

    /// Every URL the record cites, with the type it is cited for.
    pub fn cited_urls(&self) -> Vec<(&str, SourceType)> {
        let sources = self.sources();
        let mut urls = vec![(sources.specs_url.as_str(), sources.specs_type)];
        if let Some(price_url) = &sources.price_url {
            urls.push((price_url.as_str(), SourceType::PriceAvailability));
        }
        urls
    }
}

/// Parse a JSON array of seed records.
pub fn parse_dataset(json: &str) -> Result<Vec<SeedRecord>, ImportError> {
    serde_json::from_str(json).map_err(|e| ImportError::MalformedDataset {
        issues: vec![RecordIssue::dataset(format!("invalid dataset JSON: {e}"))],
    })
}

/// Load a JSON dataset file.
pub fn load_dataset(path: &Path) -> Result<Vec<SeedRecord>, ImportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ImportError::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&json)
}
