// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural checks run on a dataset before any database work.
//!
//! These catch shape problems that deserialization cannot: empty strings,
//! duplicates, mismatched source types, impossible numbers. Provenance
//! (whether a URL is acceptable) is the validator's job, not this module's.

use std::collections::{HashMap, HashSet};
use std::fmt;

use hwcat_core::{ComponentKind, CpuSpecs, GpuSpecs};
use serde::Serialize;

use crate::error::ImportError;
use crate::record::SeedRecord;

/// One structural problem, optionally tied to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub message: String,
}

impl RecordIssue {
    pub(crate) fn dataset(message: impl Into<String>) -> Self {
        Self {
            record_id: None,
            message: message.into(),
        }
    }

    fn record(record: &SeedRecord, message: impl Into<String>) -> Self {
        Self {
            record_id: Some(record.id().to_string()),
            message: message.into(),
        }
    }
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_id {
            Some(id) if !id.is_empty() => write!(f, "record `{id}`: {}", self.message),
            _ => write!(f, "dataset: {}", self.message),
        }
    }
}

/// Collect every structural issue in `records`.
pub fn check_structure(records: &[SeedRecord]) -> Vec<RecordIssue> {
    let mut issues = Vec::new();
    if records.is_empty() {
        issues.push(RecordIssue::dataset("dataset contains no records"));
        return issues;
    }

    let mut ids = HashSet::new();
    let mut slugs: HashMap<(ComponentKind, String), &str> = HashMap::new();

    for record in records {
        let id = record.id();
        if id.trim().is_empty() {
            issues.push(RecordIssue::record(record, "id must not be empty"));
        } else if !ids.insert(id) {
            issues.push(RecordIssue::record(record, "duplicate id"));
        }

        if record.model().trim().is_empty() {
            issues.push(RecordIssue::record(record, "model must not be empty"));
        } else {
            let slug = record.slug();
            if slug.is_empty() {
                issues.push(RecordIssue::record(
                    record,
                    format!("model `{}` produces an empty slug", record.model()),
                ));
            } else if let Some(other) = slugs.insert((record.kind(), slug.clone()), id) {
                issues.push(RecordIssue::record(
                    record,
                    format!("slug `{slug}` collides with record `{other}`"),
                ));
            }
        }

        check_sources(record, &mut issues);
        match record {
            SeedRecord::Cpu(r) => check_cpu_specs(record, &r.specs, &mut issues),
            SeedRecord::Gpu(r) => check_gpu_specs(record, &r.specs, &mut issues),
        }
    }

    issues
}

/// Fail with [`ImportError::MalformedDataset`] if any issue is found.
pub fn ensure_well_formed(records: &[SeedRecord]) -> Result<(), ImportError> {
    let issues = check_structure(records);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MalformedDataset { issues })
    }
}

fn check_sources(record: &SeedRecord, issues: &mut Vec<RecordIssue>) {
    let sources = record.sources();

    if sources.specs_url.trim().is_empty() {
        issues.push(RecordIssue::record(record, "specs_url must not be empty"));
    }

    let expected = record.kind().specs_source_type();
    if sources.specs_type != expected {
        issues.push(RecordIssue::record(
            record,
            format!(
                "specs_type `{}` does not match a {} record (expected `{expected}`)",
                sources.specs_type,
                record.kind().label()
            ),
        ));
    }

    if sources
        .price_url
        .as_deref()
        .is_some_and(|url| url.trim().is_empty())
    {
        issues.push(RecordIssue::record(record, "price_url must not be empty when present"));
    }

    if let Some(price) = sources.price_eur {
        if !price.is_finite() || price < 0.0 {
            issues.push(RecordIssue::record(
                record,
                format!("price_eur {price} must be a non-negative amount"),
            ));
        }
        if sources.price_url.is_none() {
            issues.push(RecordIssue::record(
                record,
                "price_eur is set but no price_url backs it",
            ));
        }
    }
}

fn check_cpu_specs(record: &SeedRecord, specs: &CpuSpecs, issues: &mut Vec<RecordIssue>) {
    if specs.cores == Some(0) {
        issues.push(RecordIssue::record(record, "cores must be positive"));
    }
    if specs.threads == Some(0) {
        issues.push(RecordIssue::record(record, "threads must be positive"));
    }
    if let (Some(cores), Some(threads)) = (specs.cores, specs.threads) {
        if threads < cores {
            issues.push(RecordIssue::record(
                record,
                format!("threads ({threads}) must not be fewer than cores ({cores})"),
            ));
        }
    }
    for (field, value) in [
        ("base_clock_ghz", specs.base_clock_ghz),
        ("boost_clock_ghz", specs.boost_clock_ghz),
    ] {
        if value.is_some_and(|v| !v.is_finite() || v <= 0.0) {
            issues.push(RecordIssue::record(record, format!("{field} must be positive")));
        }
    }
    if let (Some(base), Some(boost)) = (specs.base_clock_ghz, specs.boost_clock_ghz) {
        if boost < base {
            issues.push(RecordIssue::record(
                record,
                format!("boost_clock_ghz ({boost}) is below base_clock_ghz ({base})"),
            ));
        }
    }
    if specs.tdp_watts == Some(0) {
        issues.push(RecordIssue::record(record, "tdp_watts must be positive"));
    }
    if specs.socket.as_deref().is_some_and(|s| s.trim().is_empty()) {
        issues.push(RecordIssue::record(record, "socket must be null or non-empty"));
    }
}

fn check_gpu_specs(record: &SeedRecord, specs: &GpuSpecs, issues: &mut Vec<RecordIssue>) {
    if specs.memory_gb == Some(0) {
        issues.push(RecordIssue::record(record, "memory_gb must be positive"));
    }
    if specs.core_clock_mhz == Some(0) || specs.boost_clock_mhz == Some(0) {
        issues.push(RecordIssue::record(record, "clock speeds must be positive"));
    }
    if let (Some(core), Some(boost)) = (specs.core_clock_mhz, specs.boost_clock_mhz) {
        if boost < core {
            issues.push(RecordIssue::record(
                record,
                format!("boost_clock_mhz ({boost}) is below core_clock_mhz ({core})"),
            ));
        }
    }
    if specs.tdp_watts == Some(0) {
        issues.push(RecordIssue::record(record, "tdp_watts must be positive"));
    }
    for (field, value) in [
        ("memory_type", &specs.memory_type),
        ("interface", &specs.interface),
    ] {
        if value.as_deref().is_some_and(|s| s.trim().is_empty()) {
            issues.push(RecordIssue::record(
                record,
                format!("{field} must be null or non-empty"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_dataset;
    use hwcat_core::SourceType;

    fn seed() -> Vec<SeedRecord> {
        builtin_dataset().unwrap()
    }

    fn cpu_mut(record: &mut SeedRecord) -> &mut crate::record::CpuRecord {
        match record {
            SeedRecord::Cpu(r) => r,
            SeedRecord::Gpu(_) => panic!("expected a CPU record"),
        }
    }

    #[test]
    fn builtin_seed_is_well_formed() {
        assert_eq!(check_structure(&seed()), Vec::<RecordIssue>::new());
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(ensure_well_formed(&[]).is_err());
    }

    #[test]
    fn duplicate_ids_and_slugs_are_reported() {
        let mut records = seed();
        let copy = records[0].clone();
        records.push(copy);

        let issues = check_structure(&records);
        assert!(issues.iter().any(|i| i.message == "duplicate id"));
        assert!(issues.iter().any(|i| i.message.contains("collides")));
    }

    #[test]
    fn specs_type_must_match_kind() {
        let mut records = seed();
        cpu_mut(&mut records[0]).sources.specs_type = SourceType::GpuSpecs;
        let issues = check_structure(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].record_id.as_deref(), Some("cpu-intel-i5-14600k"));
        assert!(issues[0].message.contains("expected `cpu_specs`"));
    }

    #[test]
    fn price_needs_a_source_and_a_sane_value() {
        let mut records = seed();
        let sources = &mut cpu_mut(&mut records[0]).sources;
        sources.price_url = None;
        sources.price_eur = Some(f64::NAN);

        let issues = check_structure(&records);
        assert_eq!(issues.len(), 2, "{issues:?}");
    }

    #[test]
    fn thread_and_core_counts_are_checked() {
        let mut records = seed();
        let specs = &mut cpu_mut(&mut records[0]).specs;
        specs.cores = Some(8);
        specs.threads = Some(4);
        let issues = check_structure(&records);
        assert!(issues[0].to_string().contains("fewer than cores"));
    }

    #[test]
    fn clock_ordering_and_blank_price_url_are_checked() {
        let mut records = seed();
        let cpu = cpu_mut(&mut records[0]);
        cpu.specs.base_clock_ghz = Some(4.0);
        cpu.specs.boost_clock_ghz = Some(3.5);
        cpu.sources.price_url = Some("  ".into());
        if let SeedRecord::Gpu(gpu) = &mut records[6] {
            gpu.specs.core_clock_mhz = Some(2500);
            gpu.specs.boost_clock_mhz = Some(2000);
        }

        let messages: Vec<String> = check_structure(&records)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(messages.len(), 3, "{messages:?}");
        assert!(messages.iter().any(|m| m.contains("below base_clock_ghz")));
        assert!(messages.iter().any(|m| m.contains("below core_clock_mhz")));
        assert!(messages.iter().any(|m| m.contains("price_url must not be empty")));
    }

    #[test]
    fn null_specs_are_structurally_fine() {
        let mut records = seed();
        cpu_mut(&mut records[0]).specs = CpuSpecs::default();
        assert!(check_structure(&records).is_empty());
    }
}
