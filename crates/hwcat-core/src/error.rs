// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the hwcat workspace.

use thiserror::Error;

/// The primary error type used by the catalog storage and read service.
///
/// Source-validation outcomes are values (`ValidationResult`) and are not
/// represented here.
#[derive(Debug, Error)]
pub enum HwcatError {
    /// Configuration errors (invalid TOML, bad values, unreadable dataset file).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migrations).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A requested catalog entry does not exist.
    #[error("{kind} not found: {slug}")]
    NotFound { kind: String, slug: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HwcatError {
    /// Wrap any storage-layer error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage {
            source: Box::new(err),
        }
    }
}
