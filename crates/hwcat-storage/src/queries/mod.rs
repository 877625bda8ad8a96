// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules.
//!
//! `reseed` holds synchronous statements meant to run inside the import
//! transaction; `catalog` holds the async reads over the complete views.

pub mod catalog;
pub mod reseed;
