// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for hwcat, a provenance-checked PC hardware catalog.
//!
//! This crate provides the shared error type, the component and source-type
//! vocabulary, slug generation, and the [`CatalogReader`] trait implemented
//! by the storage layer.

pub mod error;
pub mod slug;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HwcatError;
pub use slug::slugify;
pub use traits::CatalogReader;
pub use types::{
    Brand, CatalogEntry, ComponentKind, CpuSpecs, GpuSpecs, SourceType, SpecSheet,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hwcat_error_variants_render() {
        let config = HwcatError::Config("bad path".into());
        assert_eq!(config.to_string(), "configuration error: bad path");

        let storage = HwcatError::storage(std::io::Error::other("disk full"));
        assert_eq!(storage.to_string(), "storage error: disk full");

        let not_found = HwcatError::NotFound {
            kind: "cpu".into(),
            slug: "core-i3".into(),
        };
        assert_eq!(not_found.to_string(), "cpu not found: core-i3");
    }

    #[test]
    fn catalog_reader_is_object_safe() {
        fn _assert_dyn(_: &dyn CatalogReader) {}
    }
}
