// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Non-fatal dataset warnings.

use chrono::{DateTime, TimeDelta, Utc};
use hwcat_sources::extract_domain;

use crate::record::SeedRecord;
use crate::report::{ImportWarning, WarningKind};

/// Collect warnings for `records` as of `now`.
pub fn collect_warnings(
    records: &[SeedRecord],
    now: DateTime<Utc>,
    max_verification_age: TimeDelta,
) -> Vec<ImportWarning> {
    let mut warnings = Vec::new();
    for record in records {
        let sources = record.sources();
        let mut push = |kind, message: String| {
            warnings.push(ImportWarning {
                record_id: record.id().to_string(),
                kind,
                message,
            });
        };

        let nulls = record.null_fields();
        if !nulls.is_empty() && sources.notes.as_deref().is_none_or(|n| n.trim().is_empty()) {
            push(
                WarningKind::UndocumentedNull,
                format!("null spec fields without an explanatory note: {}", nulls.join(", ")),
            );
        }

        let age = now.signed_duration_since(sources.last_verified);
        if age > max_verification_age {
            push(
                WarningKind::StaleVerification,
                format!(
                    "last verified {} ({} days ago, limit {})",
                    sources.last_verified.format("%Y-%m-%d"),
                    age.num_days(),
                    max_verification_age.num_days()
                ),
            );
        }

        if let Some(domain) = extract_domain(&sources.specs_url)
            .ok()
            .filter(|domain| domain.as_str() != record.brand().official_domain())
        {
            push(
                WarningKind::BrandDomainMismatch,
                format!(
                    "specs source `{domain}` is not {}'s official domain `{}`",
                    record.brand(),
                    record.brand().official_domain()
                ),
            );
        }

        if sources.price_eur.is_none() {
            push(WarningKind::MissingPrice, "no price recorded".to_string());
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_dataset;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn fresh_builtin_seed_is_clean() {
        let records = builtin_dataset().unwrap();
        let warnings = collect_warnings(&records, at("2025-02-01T00:00:00Z"), TimeDelta::days(180));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn old_verification_is_stale() {
        let records = builtin_dataset().unwrap();
        let warnings = collect_warnings(&records, at("2026-01-01T00:00:00Z"), TimeDelta::days(180));
        assert_eq!(warnings.len(), records.len());
        assert!(warnings.iter().all(|w| w.kind == WarningKind::StaleVerification));
    }

    #[test]
    fn undocumented_nulls_and_missing_prices_are_flagged() {
        let mut records = builtin_dataset().unwrap();
        let rx = records.iter_mut().find(|r| r.id() == "gpu-amd-rx7600").unwrap();
        if let SeedRecord::Gpu(gpu) = rx {
            gpu.sources.notes = None;
            gpu.sources.price_eur = None;
        }

        let warnings = collect_warnings(&records, at("2025-02-01T00:00:00Z"), TimeDelta::days(180));
        let kinds: Vec<WarningKind> = warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, [WarningKind::UndocumentedNull, WarningKind::MissingPrice]);
        assert!(warnings[0].message.contains("core_clock_mhz"));
    }

    #[test]
    fn foreign_specs_domain_is_flagged() {
        let mut records = builtin_dataset().unwrap();
        if let SeedRecord::Cpu(cpu) = &mut records[0] {
            cpu.sources.specs_url = "https://www.amd.com/en/products/x.html".into();
        }
        let warnings = collect_warnings(&records, at("2025-02-01T00:00:00Z"), TimeDelta::days(180));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::BrandDomainMismatch);
    }
}
