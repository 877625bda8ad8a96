// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source provenance for hwcat.
//!
//! Every URL the catalog cites must come from an approved domain, and only
//! for the kinds of fact that domain is approved for. This crate holds the
//! [`SourceRegistry`] (allowlist plus denylist) and the [`SourceValidator`]
//! that checks URLs against it.

pub mod domain;
pub mod registry;
pub mod validator;

pub use domain::{extract_domain, parse_source_url, InvalidUrl, SourceHost};
pub use registry::{AllowedDomain, SourceRegistry, SourceRegistryBuilder};
pub use validator::{
    ErrorCode, SourceValidationError, SourceValidator, UrlValidation, ValidatedSource,
    ValidationResult,
};
