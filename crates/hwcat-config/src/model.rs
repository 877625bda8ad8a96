// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for hwcat.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use hwcat_core::SourceType;
use serde::{Deserialize, Serialize};

/// Top-level hwcat configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HwcatConfig {
    /// Catalog database settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Additions to the built-in source allowlist and denylist.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Import pipeline settings.
    #[serde(default)]
    pub import: ImportConfig,
}

/// Catalog database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to the SQLite catalog database.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("hwcat").join("catalog.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("catalog.db"))
        .to_string_lossy()
        .into_owned()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Extra source grants and bans layered over the built-in registry.
///
/// Grants for a domain that is already registered are merged into its
/// existing type set; they never replace it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Additional approved domains.
    #[serde(default)]
    pub extra_allowed: Vec<AllowedDomainConfig>,

    /// Additional forbidden domains (aggregators, community databases).
    #[serde(default)]
    pub extra_forbidden: Vec<String>,
}

/// One `[[sources.extra_allowed]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AllowedDomainConfig {
    /// Registrable domain, e.g. `corsair.com`.
    pub domain: String,

    /// Source types this domain may be cited for.
    pub types: Vec<SourceType>,

    /// Human-readable description of the source.
    #[serde(default)]
    pub description: String,
}

/// Import pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// Verifications older than this many days produce an import warning.
    #[serde(default = "default_max_verification_age_days")]
    pub max_verification_age_days: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_verification_age_days: default_max_verification_age_days(),
        }
    }
}

fn default_max_verification_age_days() -> u32 {
    180
}
