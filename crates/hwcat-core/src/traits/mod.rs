// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the seams between the import core and its collaborators.

pub mod catalog;

pub use catalog::CatalogReader;
