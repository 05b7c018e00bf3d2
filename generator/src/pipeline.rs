//! Manifest generation pipeline.
//!
//! Fetches every artefact of a catalog at one revision, hashes the bytes,
//! renders the records through the caller's template, and replaces the
//! output file. Nothing is written unless every earlier step succeeds.

use crate::artefact::download::{ArtifactFetcher, HttpFetcher};
use crate::artefact::revision::Revision;
use crate::artefact::sha256_digest::Sha256Digest;
use crate::catalog::Catalog;
use crate::error::{ManifestError, Result};
use crate::manifest::record::{ManifestRecords, ResolvedArtifact, RevisionUrls};
use crate::manifest::render::{ManifestTemplate, template_context};
use crate::manifest::writer::write_atomically;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Handlebars template to render.
    pub template: PathBuf,
    /// Destination manifest path.
    pub output: PathBuf,
    /// Revision every artefact is fetched at.
    pub revision: Revision,
    /// Raw-content root of the upstream repository.
    pub base_url: String,
    /// Per-request network timeout.
    pub timeout: Duration,
}

/// A rendered manifest and the records it was rendered from.
#[derive(Debug, Clone)]
pub struct RenderedManifest {
    /// Records in catalog order.
    pub records: ManifestRecords,
    /// Rendered template output.
    pub text: String,
}

/// Fetch and hash every artefact in `catalog`.
///
/// Stops at the first failed retrieval; a manifest missing an entry is
/// never produced.
///
/// # Errors
///
/// Returns [`ManifestError::Retrieval`] naming the artefact that failed.
pub fn resolve_records(
    catalog: &Catalog,
    urls: &RevisionUrls,
    fetcher: &dyn ArtifactFetcher,
) -> Result<ManifestRecords> {
    let mut records = ManifestRecords::new();
    for descriptor in catalog.artifacts() {
        debug!("Processing artefact: {}", descriptor.name());
        let url = urls.artifact_url(catalog.remote_prefix(), descriptor.rpath());
        debug!("Fetching {url}");
        let bytes = fetcher
            .fetch(&url)
            .map_err(|source| ManifestError::Retrieval {
                artifact: descriptor.name().to_owned(),
                source,
            })?;
        let sha256 = Sha256Digest::of(&bytes);
        debug!("{}: {} bytes, sha256 {sha256}", descriptor.name(), bytes.len());
        let doc_url = descriptor.doc_path().map(|path| urls.doc_url(path));
        records.push(
            descriptor.name(),
            ResolvedArtifact::new(descriptor, url, doc_url, sha256),
        );
    }
    Ok(records)
}

/// Resolve `catalog` and render it through `template`.
///
/// # Errors
///
/// Returns [`ManifestError::Retrieval`] or [`ManifestError::Template`].
pub fn render_manifest(
    catalog: &Catalog,
    urls: &RevisionUrls,
    template: &ManifestTemplate,
    fetcher: &dyn ArtifactFetcher,
) -> Result<RenderedManifest> {
    let records = resolve_records(catalog, urls, fetcher)?;
    debug!("{records:?}");
    let context = template_context(catalog.context_key(), &records, urls.revision())?;
    let text = template.render(&context)?;
    Ok(RenderedManifest { records, text })
}

/// Run the full pipeline with the production HTTP fetcher.
///
/// # Errors
///
/// Returns any [`ManifestError`]; the output file is untouched on error.
pub fn generate(catalog: &Catalog, config: &GenerateConfig) -> Result<ManifestRecords> {
    let fetcher = HttpFetcher::with_timeout(config.timeout);
    generate_with(catalog, config, &fetcher)
}

/// Testable inner function with an injected fetcher.
///
/// The template is loaded before any download so a bad template costs no
/// network traffic.
///
/// # Errors
///
/// Returns any [`ManifestError`]; the output file is untouched on error.
pub fn generate_with(
    catalog: &Catalog,
    config: &GenerateConfig,
    fetcher: &dyn ArtifactFetcher,
) -> Result<ManifestRecords> {
    let template = ManifestTemplate::load(&config.template)?;
    let urls = RevisionUrls::new(&config.base_url, config.revision.clone());
    info!(
        "Generating {} manifest at revision {}",
        catalog.name(),
        config.revision
    );
    let rendered = render_manifest(catalog, &urls, &template, fetcher)?;
    write_atomically(&config.output, &rendered.text)?;
    info!(
        "Wrote {} record(s) to {}",
        rendered.records.len(),
        config.output.display()
    );
    Ok(rendered.records)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
