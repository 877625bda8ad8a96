// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-level failures, mapped to a non-zero exit status by `main`.

use hwcat_core::HwcatError;
use hwcat_import::ImportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] HwcatError),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog database has not been created yet.
    #[error("no catalog at {path}; run `hwcat import` first")]
    CatalogMissing { path: String },

    /// A report was produced but contains rejected sources.
    #[error("{failed} source URL(s) failed validation")]
    SourcesRejected { failed: usize },
}
