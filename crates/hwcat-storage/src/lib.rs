// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for hwcat.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, the write statements the import
//! pipeline runs inside its transaction, and [`SqliteCatalog`], the read-only
//! catalog service.

pub mod catalog;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

#[cfg(test)]
mod test_support;

pub use catalog::SqliteCatalog;
pub use database::Database;
pub use models::*;
