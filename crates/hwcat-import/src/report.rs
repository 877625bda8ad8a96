// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Import run report.

use std::fmt;

use chrono::{DateTime, Utc};
use hwcat_core::{Brand, ComponentKind};
use hwcat_storage::CatalogCounts;
use serde::Serialize;

/// Category of a non-fatal import warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A spec field is null and the record has no note explaining why.
    UndocumentedNull,
    /// The record was last verified longer ago than the configured maximum.
    StaleVerification,
    /// The specs URL is not on the brand's own domain.
    BrandDomainMismatch,
    /// The record carries no price.
    MissingPrice,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WarningKind::UndocumentedNull => "undocumented-null",
            WarningKind::StaleVerification => "stale-verification",
            WarningKind::BrandDomainMismatch => "brand-domain-mismatch",
            WarningKind::MissingPrice => "missing-price",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportWarning {
    pub record_id: String,
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.record_id, self.message)
    }
}

/// Components imported for one brand and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandBreakdown {
    pub brand: Brand,
    pub kind: ComponentKind,
    pub components: u64,
}

/// Summary of a successful import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub recorded_at: DateTime<Utc>,
    pub counts: CatalogCounts,
    pub breakdown: Vec<BrandBreakdown>,
    pub warnings: Vec<ImportWarning>,
}

impl ImportReport {
    /// Components of `kind` across all brands.
    pub fn components_of(&self, kind: ComponentKind) -> u64 {
        self.breakdown
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.components)
            .sum()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        writeln!(f, "Catalog import report ({})", self.recorded_at.to_rfc3339())?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "  {:<20} {:>5}", "Manufacturers", c.manufacturers)?;
        writeln!(
            f,
            "  {:<20} {:>5}  (CPU {}, GPU {})",
            "Components",
            c.components,
            self.components_of(ComponentKind::Cpu),
            self.components_of(ComponentKind::Gpu)
        )?;
        writeln!(f, "  {:<20} {:>5}", "CPU specs", c.cpu_specs)?;
        writeln!(f, "  {:<20} {:>5}", "GPU specs", c.gpu_specs)?;
        writeln!(f, "  {:<20} {:>5}", "Sources", c.sources)?;
        writeln!(f, "  {:<20} {:>5}", "Source links", c.component_sources)?;
        writeln!(f, "  {:<20} {:>5}", "Prices", c.prices)?;

        writeln!(f)?;
        writeln!(f, "By brand:")?;
        for row in &self.breakdown {
            writeln!(
                f,
                "  {:<8} {:<4} {:>3}",
                row.brand.name(),
                row.kind.label(),
                row.components
            )?;
        }

        writeln!(f)?;
        if self.warnings.is_empty() {
            writeln!(f, "No warnings.")?;
        } else {
            writeln!(f, "Warnings ({}):", self.warnings.len())?;
            for warning in &self.warnings {
                writeln!(f, "  - {warning}")?;
            }
        }
        Ok(())
    }
}
