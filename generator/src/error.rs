//! Error types for manifest generation.
//!
//! Every variant is fatal to a run. Each names the stage that failed and,
//! for retrievals, the artefact involved.

use crate::artefact::download::DownloadError;
use crate::artefact::error::ArtefactError;
use crate::manifest::render::TemplateError;
use crate::manifest::writer::OutputError;
use thiserror::Error;

/// Errors that abort a manifest generation run.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The supplied revision failed validation.
    #[error(transparent)]
    InvalidRevision(#[from] ArtefactError),

    /// An artefact could not be fetched.
    #[error("failed to retrieve artefact {artifact}: {source}")]
    Retrieval {
        /// Name of the artefact that failed.
        artifact: String,
        /// The underlying download error.
        #[source]
        source: DownloadError,
    },

    /// The template could not be loaded or rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The output manifest could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result type alias using [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;
