// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL slugs for catalog entries.
//!
//! Slugs appear in stored links, so the mapping from model name to slug must
//! stay stable across rebuilds.

/// Convert a model name into a slug.
///
/// Lower-cases ASCII, collapses every run of non-alphanumeric characters into
/// a single `-`, and trims leading/trailing separators.
/// `"Core i9-14900K"` becomes `"core-i9-14900k"`.
pub fn slugify(model: &str) -> String {
    let mut slug = String::with_capacity(model.len());
    let mut pending_separator = false;

    for c in model.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
