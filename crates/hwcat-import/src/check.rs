// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dry-run provenance check over a dataset.
//!
//! Runs the validator over every cited URL without touching the database
//! and without stopping at the first failure, so the whole source list can
//! be fixed in one pass.

use std::fmt;

use hwcat_core::{ComponentKind, SourceType};
use hwcat_sources::{SourceValidator, ValidationResult};
use serde::Serialize;

use crate::record::SeedRecord;

/// One cited URL and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct UrlCheck {
    pub url: String,
    pub source_type: SourceType,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Every URL check for one record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordCheck {
    pub record_id: String,
    pub model: String,
    pub kind: ComponentKind,
    pub checks: Vec<UrlCheck>,
}

impl RecordCheck {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.result.valid)
    }
}

/// Aggregate outcome of a dataset check.
#[derive(Debug, Clone, Serialize)]
pub struct SourceCheckReport {
    pub records: Vec<RecordCheck>,
    pub summary: CheckSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub records: usize,
    pub records_passed: usize,
    pub urls: usize,
    pub urls_failed: usize,
}

impl SourceCheckReport {
    pub fn is_clean(&self) -> bool {
        self.summary.urls_failed == 0
    }

    /// The failing URL checks, paired with their record id.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &UrlCheck)> {
        self.records.iter().flat_map(|record| {
            record
                .checks
                .iter()
                .filter(|c| !c.result.valid)
                .map(move |c| (record.record_id.as_str(), c))
        })
    }
}

/// Validate every URL cited by `records`.
pub fn check_sources(validator: &SourceValidator, records: &[SeedRecord]) -> SourceCheckReport {
    let records: Vec<RecordCheck> = records
        .iter()
        .map(|record| RecordCheck {
            record_id: record.id().to_string(),
            model: record.model().to_string(),
            kind: record.kind(),
            checks: record
                .cited_urls()
                .into_iter()
                .map(|(url, source_type)| UrlCheck {
                    url: url.to_string(),
                    source_type,
                    result: validator.validate(url, Some(source_type)),
                })
                .collect(),
        })
        .collect();

    let urls = records.iter().map(|r| r.checks.len()).sum();
    let urls_failed = records
        .iter()
        .flat_map(|r| &r.checks)
        .filter(|c| !c.result.valid)
        .count();
    let summary = CheckSummary {
        records: records.len(),
        records_passed: records.iter().filter(|r| r.passed()).count(),
        urls,
        urls_failed,
    };

    SourceCheckReport { records, summary }
}

impl fmt::Display for SourceCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            let status = if record.passed() { "PASS" } else { "FAIL" };
            writeln!(f, "[{status}] {} ({})", record.model, record.record_id)?;
            for check in &record.checks {
                let ty: &'static str = check.source_type.into();
                match (&check.result.error_code, &check.result.reason) {
                    (Some(code), Some(reason)) => writeln!(f, "    {ty:<18} {code}: {reason}")?,
                    _ => writeln!(f, "    {ty:<18} ok")?,
                }
            }
        }
        let s = &self.summary;
        writeln!(f)?;
        writeln!(
            f,
            "{}/{} records passed, {} of {} URLs failed",
            s.records_passed, s.records, s.urls_failed, s.urls
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_dataset;
    use hwcat_sources::{ErrorCode, SourceRegistry};
    use std::sync::Arc;

    fn validator() -> SourceValidator {
        SourceValidator::new(Arc::new(SourceRegistry::builtin()))
    }

    #[test]
    fn builtin_seed_passes() {
        let report = check_sources(&validator(), &builtin_dataset().unwrap());
        assert!(report.is_clean());
        assert_eq!(report.summary.records, 12);
        assert_eq!(report.summary.records_passed, 12);
        assert_eq!(report.summary.urls, 24);
        assert!(report.to_string().contains("12/12 records passed"));
    }

    #[test]
    fn every_failure_is_reported() {
        let mut records = builtin_dataset().unwrap();
        if let SeedRecord::Cpu(cpu) = &mut records[0] {
            cpu.sources.specs_url = "https://www.cpu-world.com/CPUs/Core_i5/".into();
            cpu.sources.price_url = Some("not-a-url".into());
        }
        if let SeedRecord::Gpu(gpu) = &mut records[11] {
            gpu.sources.price_url = Some("https://pcpartpicker.com/product/x".into());
        }

        let report = check_sources(&validator(), &records);
        assert!(!report.is_clean());
        assert_eq!(report.summary.urls_failed, 3);
        assert_eq!(report.summary.records_passed, 10);

        let codes: Vec<(&str, Option<ErrorCode>)> = report
            .failures()
            .map(|(id, c)| (id, c.result.error_code))
            .collect();
        assert_eq!(
            codes,
            [
                ("cpu-intel-i5-14600k", Some(ErrorCode::SourceNotAllowed)),
                ("cpu-intel-i5-14600k", Some(ErrorCode::InvalidUrl)),
                ("gpu-amd-rx7900xtx", Some(ErrorCode::SourceNotAllowed)),
            ]
        );
        assert!(report.to_string().contains("[FAIL] Core i5-14600K"));
    }
}
