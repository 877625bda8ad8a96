// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source URL validation against the registry.
//!
//! [`SourceValidator::validate`] never fails: every outcome, including a
//! malformed URL, is a [`ValidationResult`]. [`SourceValidator::validate_strict`]
//! is the import-boundary form that turns a rejection into an error.

use std::collections::BTreeSet;
use std::sync::Arc;

use hwcat_core::SourceType;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::parse_source_url;
use crate::registry::SourceRegistry;

/// Machine-readable rejection code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The input is not an absolute http(s) URL with a host.
    InvalidUrl,
    /// The domain is unregistered or forbidden.
    SourceNotAllowed,
    /// The domain is registered but not for the requested type.
    SourceTypeNotAllowed,
}

/// Outcome of validating one URL.
///
/// When `valid`, `domain` and `allowed_types` are set and `reason` and
/// `error_code` are not. When not `valid`, `reason` and `error_code` are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<BTreeSet<SourceType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl ValidationResult {
    fn accepted(domain: String, allowed_types: BTreeSet<SourceType>) -> Self {
        Self {
            valid: true,
            domain: Some(domain),
            allowed_types: Some(allowed_types),
            reason: None,
            error_code: None,
        }
    }

    fn rejected(code: ErrorCode, reason: String, domain: Option<String>) -> Self {
        Self {
            valid: false,
            domain,
            allowed_types: None,
            reason: Some(reason),
            error_code: Some(code),
        }
    }
}

/// A URL that passed validation, as the import pipeline consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSource {
    pub url: String,
    pub domain: String,
    pub allowed_types: BTreeSet<SourceType>,
}

/// A rejected URL at the import boundary.
#[derive(Debug, Clone, Error)]
#[error(
    "{error_code}: {}",
    .result.reason.as_deref().unwrap_or("source validation failed")
)]
pub struct SourceValidationError {
    pub error_code: ErrorCode,
    pub url: String,
    pub result: ValidationResult,
}

/// One entry of a batch validation.
#[derive(Debug, Clone, Serialize)]
pub struct UrlValidation {
    pub url: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Checks source URLs against a shared [`SourceRegistry`].
#[derive(Debug, Clone)]
pub struct SourceValidator {
    registry: Arc<SourceRegistry>,
}

impl SourceValidator {
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Validate `url`, optionally for a specific source type.
    ///
    /// Checks run in order: URL shape, denylist, allowlist, type grant. The
    /// first failure decides the result.
    pub fn validate(&self, url: &str, expected: Option<SourceType>) -> ValidationResult {
        let host = match parse_source_url(url) {
            Ok(host) => host,
            Err(e) => {
                debug!(url, error = %e, "source rejected: invalid url");
                return ValidationResult::rejected(
                    ErrorCode::InvalidUrl,
                    format!("Invalid URL format: {url}"),
                    None,
                );
            }
        };

        if let Some(forbidden) = self.registry.forbidden_match(&host.hostname) {
            debug!(url, forbidden, "source rejected: forbidden domain");
            return ValidationResult::rejected(
                ErrorCode::SourceNotAllowed,
                format!(
                    "Domain \"{}\" is a forbidden source ({forbidden} is an aggregator or \
                     community database). Only official manufacturer and approved retailer \
                     sources are permitted.",
                    host.domain
                ),
                Some(host.domain),
            );
        }

        let allowed_types = self.registry.allowed_types(&host.domain);
        if allowed_types.is_empty() {
            debug!(url, domain = %host.domain, "source rejected: not allowlisted");
            return ValidationResult::rejected(
                ErrorCode::SourceNotAllowed,
                format!(
                    "Domain \"{}\" is not in the allowlist. Only official manufacturer and \
                     approved retailer sources are permitted.",
                    host.domain
                ),
                Some(host.domain),
            );
        }

        if let Some(expected) = expected.filter(|t| !allowed_types.contains(t)) {
            debug!(url, domain = %host.domain, %expected, "source rejected: type not granted");
            let granted = allowed_types
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return ValidationResult::rejected(
                ErrorCode::SourceTypeNotAllowed,
                format!(
                    "Domain \"{}\" does not support source type \"{expected}\". Allowed types: \
                     {granted}",
                    host.domain
                ),
                Some(host.domain),
            );
        }

        ValidationResult::accepted(host.domain, allowed_types)
    }

    /// Validate `url` and fail on rejection.
    pub fn validate_strict(
        &self,
        url: &str,
        expected: Option<SourceType>,
    ) -> Result<ValidatedSource, SourceValidationError> {
        let result = self.validate(url, expected);
        match (result.valid, result.error_code) {
            (true, _) => Ok(ValidatedSource {
                url: url.to_string(),
                domain: result.domain.unwrap_or_default(),
                allowed_types: result.allowed_types.unwrap_or_default(),
            }),
            (false, code) => {
                let error_code = code.unwrap_or(ErrorCode::SourceNotAllowed);
                error!(url, %error_code, "source validation failed");
                Err(SourceValidationError {
                    error_code,
                    url: url.to_string(),
                    result,
                })
            }
        }
    }

    /// Validate every URL independently, in input order.
    pub fn validate_many<I, S>(&self, urls: I, expected: Option<SourceType>) -> Vec<UrlValidation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter()
            .map(|url| {
                let url = url.as_ref();
                UrlValidation {
                    url: url.to_string(),
                    result: self.validate(url, expected),
                }
            })
            .collect()
    }
}
