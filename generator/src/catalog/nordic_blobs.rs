//! Catalog of Nordic signed blobs hosted in the nrfxlib repository.
//!
//! Paths are relative to the repository root, so the remote prefix is empty
//! and each descriptor's `rpath` doubles as its install path.

use super::{ArtifactDescriptor, Catalog};

/// Template variable that receives the blob records.
pub const CONTEXT_KEY: &str = "blobs";

/// Build the blob catalog.
///
/// # Examples
///
/// ```
/// use module_manifest::catalog::nordic_blobs;
///
/// let catalog = nordic_blobs::catalog();
/// assert_eq!(catalog.context_key(), "blobs");
/// assert!(!catalog.artifacts().is_empty());
/// ```
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "nordic-blobs",
        CONTEXT_KEY,
        "",
        vec![
            ArtifactDescriptor::new(
                "suit_manifest_starter",
                "nRF54H20 series SUIT manifest starter",
                "suit/bin/suit_manifest_starter.hex",
                "suit/bin/suit_manifest_starter.hex",
            )
            .with_version("5.0.0")
            .with_doc_path("suit/doc"),
        ],
    )
}
