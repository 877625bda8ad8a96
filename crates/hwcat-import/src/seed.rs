// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The curated built-in dataset: six CPUs and six GPUs with official
//! manufacturer spec pages and retailer price pages.

use crate::error::ImportError;
use crate::record::{SeedRecord, parse_dataset};

const BUILTIN_SEED_JSON: &str = include_str!("../data/seed.json");

/// Parse the built-in dataset.
pub fn builtin_dataset() -> Result<Vec<SeedRecord>, ImportError> {
    parse_dataset(BUILTIN_SEED_JSON)
}
