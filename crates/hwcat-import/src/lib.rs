// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dataset model and import pipeline for hwcat.
//!
//! A dataset is a list of [`SeedRecord`]s. [`check_sources`] validates every
//! cited URL as a dry run; [`ImportPipeline::import_all`] checks the dataset
//! structurally, then reseeds the catalog in a single transaction that is
//! rolled back on the first rejected source.

pub mod check;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod seed;
pub mod warnings;

pub use check::{SourceCheckReport, check_sources};
pub use dataset::{RecordIssue, check_structure};
pub use error::ImportError;
pub use pipeline::{ImportOptions, ImportPipeline};
pub use record::{SeedRecord, load_dataset, parse_dataset};
pub use report::{ImportReport, ImportWarning, WarningKind};
pub use seed::builtin_dataset;
