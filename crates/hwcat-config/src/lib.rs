// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for hwcat.
//!
//! TOML configuration with strict key checking (`deny_unknown_fields`), XDG
//! file hierarchy lookup, `HWCAT_*` environment overrides, and miette
//! diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use hwcat_config::load_and_validate;
//!
//! let config = load_and_validate(None).expect("config errors");
//! println!("catalog at {}", config.catalog.database_path);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AllowedDomainConfig, HwcatConfig, SourcesConfig};

/// Load configuration and validate it.
///
/// With `path`, only that file (plus env overrides) is read; otherwise the
/// XDG hierarchy is used. Figment errors are converted into diagnostics.
pub fn load_and_validate(path: Option<&Path>) -> Result<HwcatConfig, Vec<ConfigError>> {
    let loaded = match path {
        Some(path) => loader::load_config_from_path(path),
        None => loader::load_config(),
    };

    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = collect_toml_sources(path);
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<HwcatConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read the TOML files that may have contributed to the config, for spans.
fn collect_toml_sources(explicit: Option<&Path>) -> Vec<(String, String)> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let mut paths = vec![Path::new(loader::SYSTEM_CONFIG_PATH).to_path_buf()];
            paths.extend(loader::user_config_path());
            if let Ok(cwd) = std::env::current_dir() {
                paths.push(cwd.join(loader::LOCAL_CONFIG_FILE));
            }
            paths
        }
    };

    candidates
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
