// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provenance commands: `hwcat validate`, `hwcat check-url` and
//! `hwcat sources`.
//!
//! None of these touch the catalog database.

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;
use hwcat_config::HwcatConfig;
use hwcat_core::SourceType;
use hwcat_import::SourceCheckReport;
use hwcat_sources::{AllowedDomain, SourceRegistry, UrlValidation, ValidationResult};
use serde::Serialize;

use crate::error::CliError;
use crate::import::{load_records, validator};
use crate::output::Output;

/// Run the `hwcat validate` command.
///
/// Fails with [`CliError::SourcesRejected`] after printing the report if any
/// cited URL is rejected.
pub fn run_validate(
    config: &HwcatConfig,
    dataset: Option<&Path>,
    out: Output,
) -> Result<(), CliError> {
    let records = load_records(dataset)?;
    let report = hwcat_import::check_sources(&validator(config), &records);

    if out.is_json() {
        out.json(&report)?;
    } else if out.color {
        print!("{}", render_check_report_colored(&report));
    } else {
        print!("{report}");
    }

    match report.summary.urls_failed {
        0 => Ok(()),
        failed => Err(CliError::SourcesRejected { failed }),
    }
}

fn render_check_report_colored(report: &SourceCheckReport) -> String {
    let mut buf = String::new();
    for record in &report.records {
        let symbol = if record.passed() {
            "✓".green()
        } else {
            "✗".red()
        };
        let _ = writeln!(buf, "{symbol} {} ({})", record.model.bold(), record.record_id);
        for check in &record.checks {
            let ty: &'static str = check.source_type.into();
            let _ = writeln!(buf, "    {ty:<18} {}", describe(&check.result, true));
        }
    }
    let s = &report.summary;
    let summary = format!(
        "{}/{} records passed, {} of {} URLs failed",
        s.records_passed, s.records, s.urls_failed, s.urls
    );
    let _ = writeln!(buf);
    let _ = writeln!(
        buf,
        "{}",
        if s.urls_failed == 0 {
            summary.green()
        } else {
            summary.red()
        }
    );
    buf
}

/// One-line description of a validation outcome.
fn describe(result: &ValidationResult, color: bool) -> String {
    match (&result.error_code, &result.reason) {
        (Some(code), Some(reason)) if color => format!("{}: {reason}", code.to_string().red()),
        (Some(code), Some(reason)) => format!("{code}: {reason}"),
        _ => {
            let types = result
                .allowed_types
                .iter()
                .flatten()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let domain = result.domain.as_deref().unwrap_or_default();
            if color {
                format!("{} {domain} [{types}]", "ok".green())
            } else {
                format!("ok {domain} [{types}]")
            }
        }
    }
}

/// Render batch results, one URL per line.
pub fn render_url_checks(results: &[UrlValidation], color: bool) -> String {
    let mut buf = String::new();
    for entry in results {
        let status = match (entry.result.valid, color) {
            (true, true) => "✓".green().to_string(),
            (false, true) => "✗".red().to_string(),
            (true, false) => "[OK]  ".to_string(),
            (false, false) => "[FAIL]".to_string(),
        };
        let _ = writeln!(buf, "{status} {}", entry.url);
        let _ = writeln!(buf, "       {}", describe(&entry.result, color));
    }
    buf
}

/// Run the `hwcat check-url` command.
pub fn run_check_url(
    config: &HwcatConfig,
    urls: &[String],
    source_type: Option<SourceType>,
    out: Output,
) -> Result<(), CliError> {
    let results = validator(config).validate_many(urls, source_type);

    if out.is_json() {
        out.json(&results)?;
    } else {
        print!("{}", render_url_checks(&results, out.color));
    }

    match results.iter().filter(|r| !r.result.valid).count() {
        0 => Ok(()),
        failed => Err(CliError::SourcesRejected { failed }),
    }
}

#[derive(Serialize)]
struct RegistryView<'a> {
    allowed: Vec<&'a AllowedDomain>,
    forbidden: Vec<&'a str>,
}

/// Render the effective registry as text.
pub fn render_registry(registry: &SourceRegistry) -> String {
    let mut buf = String::from("Allowed sources:\n");
    for entry in registry.allowed() {
        let types = entry
            .types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(buf, "  {:<24} {types}", entry.domain);
        if !entry.description.is_empty() {
            let _ = writeln!(buf, "  {:<24} {}", "", entry.description);
        }
    }
    buf.push_str("\nForbidden sources:\n");
    for domain in registry.forbidden() {
        let _ = writeln!(buf, "  {domain}");
    }
    buf
}

/// Run the `hwcat sources` command.
pub fn run_sources(config: &HwcatConfig, out: Output) -> Result<(), CliError> {
    let registry = SourceRegistry::from_config(&config.sources);
    if out.is_json() {
        out.json(&RegistryView {
            allowed: registry.allowed().collect(),
            forbidden: registry.forbidden().collect(),
        })
    } else {
        print!("{}", render_registry(&registry));
        Ok(())
    }
}
