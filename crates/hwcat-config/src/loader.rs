// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hwcat.toml` > `~/.config/hwcat/hwcat.toml` > `/etc/hwcat/hwcat.toml`
//! with environment variable overrides via `HWCAT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HwcatConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/hwcat/hwcat.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "hwcat.toml";

/// Location of the per-user configuration file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hwcat").join("hwcat.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hwcat/hwcat.toml` (system-wide)
/// 3. `~/.config/hwcat/hwcat.toml` (user XDG config)
/// 4. `./hwcat.toml` (local directory)
/// 5. `HWCAT_*` environment variables
pub fn load_config() -> Result<HwcatConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<HwcatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwcatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file path with env var overrides.
///
/// Used for `--config <path>`; the XDG hierarchy is skipped.
pub fn load_config_from_path(path: &Path) -> Result<HwcatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwcatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(HwcatConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Top-level config sections that environment keys may address.
const SECTIONS: [&str; 4] = ["catalog", "logging", "sources", "import"];

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys contain
/// underscores: `HWCAT_CATALOG_DATABASE_PATH` must become
/// `catalog.database_path`, not `catalog.database.path`.
fn env_provider() -> Env {
    Env::prefixed("HWCAT_").map(|key| section_key(key.as_str()).into())
}

/// Map a prefix-stripped env key to its dotted config path.
///
/// Figment hands over the key in its original case, so it is lowercased
/// before the section prefix is matched.
fn section_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(field) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{field}");
        }
    }
    key
}
