// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Import error types.

use std::path::PathBuf;

use hwcat_core::HwcatError;
use hwcat_sources::SourceValidationError;
use thiserror::Error;

use crate::dataset::RecordIssue;

/// Why an import run (or dataset load) did not complete.
///
/// Any of these leaves the previously persisted catalog untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The dataset file could not be read.
    #[error("cannot read dataset {}: {source}", .path.display())]
    DatasetIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset failed structural checks; nothing was written.
    #[error("malformed dataset ({} issue(s))", .issues.len())]
    MalformedDataset { issues: Vec<RecordIssue> },

    /// A record cited a source that failed validation; the run was rolled back.
    #[error("import aborted at record `{record_id}`: {source}")]
    SourceRejected {
        record_id: String,
        source: SourceValidationError,
    },

    #[error(transparent)]
    Storage(#[from] HwcatError),
}

impl From<rusqlite::Error> for ImportError {
    fn from(e: rusqlite::Error) -> Self {
        ImportError::Storage(HwcatError::storage(e))
    }
}

/// Unwrap the import closure's own error, mapping connection failures.
pub(crate) fn flatten_call_err(e: tokio_rusqlite::Error<ImportError>) -> ImportError {
    match e {
        tokio_rusqlite::Error::Error(inner) => inner,
        other => ImportError::Storage(HwcatError::Storage {
            source: other.to_string().into(),
        }),
    }
}
