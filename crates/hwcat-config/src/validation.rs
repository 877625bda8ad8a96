// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: non-empty paths, known
//! log levels, and well-formed source domains.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::HwcatConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem rather than stopping at the first.
pub fn validate_config(config: &HwcatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.catalog.database_path.trim().is_empty() {
        errors.push(ConfigError::validation(
            "catalog.database_path must not be empty",
        ));
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "logging.level `{}` is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if config.import.max_verification_age_days == 0 {
        errors.push(ConfigError::validation(
            "import.max_verification_age_days must be at least 1",
        ));
    }

    let forbidden: HashSet<&str> = config
        .sources
        .extra_forbidden
        .iter()
        .map(String::as_str)
        .collect();

    for (i, entry) in config.sources.extra_allowed.iter().enumerate() {
        if let Some(problem) = domain_problem(&entry.domain) {
            errors.push(ConfigError::validation(format!(
                "sources.extra_allowed[{i}].domain `{}` {problem}",
                entry.domain
            )));
        }
        if entry.types.is_empty() {
            errors.push(ConfigError::validation(format!(
                "sources.extra_allowed[{i}] (`{}`) must grant at least one type",
                entry.domain
            )));
        }
        if forbidden.contains(entry.domain.as_str()) {
            errors.push(ConfigError::validation(format!(
                "`{}` is listed in both sources.extra_allowed and sources.extra_forbidden",
                entry.domain
            )));
        }
    }

    for (i, domain) in config.sources.extra_forbidden.iter().enumerate() {
        if let Some(problem) = domain_problem(domain) {
            errors.push(ConfigError::validation(format!(
                "sources.extra_forbidden[{i}] `{domain}` {problem}"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Describe why `domain` is not a bare lower-case domain name, if it isn't.
fn domain_problem(domain: &str) -> Option<&'static str> {
    if domain.is_empty() {
        Some("must not be empty")
    } else if domain.contains("://") || domain.contains('/') {
        Some("must be a bare domain without scheme or path")
    } else if domain.chars().any(|c| c.is_ascii_uppercase()) {
        Some("must be lower-case")
    } else if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        Some("contains characters not valid in a domain name")
    } else if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        Some("must be a dotted domain name such as `example.com`")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AllowedDomainConfig;
    use hwcat_core::SourceType;

    fn grant(domain: &str) -> AllowedDomainConfig {
        AllowedDomainConfig {
            domain: domain.to_string(),
            types: vec![SourceType::RamSpecs],
            description: String::new(),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&HwcatConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = HwcatConfig::default();
        config.catalog.database_path = "  ".into();
        config.logging.level = "loud".into();
        config.import.max_verification_age_days = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_malformed_extra_domains() {
        for bad in ["", "https://corsair.com", "Corsair.com", "corsair", "cor sair.com", "corsair.com/"] {
            let mut config = HwcatConfig::default();
            config.sources.extra_allowed.push(grant(bad));
            assert!(validate_config(&config).is_err(), "`{bad}` should be rejected");
        }
    }

    #[test]
    fn accepts_well_formed_extra_domain() {
        let mut config = HwcatConfig::default();
        config.sources.extra_allowed.push(grant("gskill.com"));
        config.sources.extra_forbidden.push("hwbench.example.org".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_grant_without_types() {
        let mut config = HwcatConfig::default();
        let mut entry = grant("crucial.com");
        entry.types.clear();
        config.sources.extra_allowed.push(entry);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("at least one type"));
    }

    #[test]
    fn rejects_domain_both_allowed_and_forbidden() {
        let mut config = HwcatConfig::default();
        config.sources.extra_allowed.push(grant("example.com"));
        config.sources.extra_forbidden.push("example.com".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("both"));
    }
}
