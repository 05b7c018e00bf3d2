//! Resolved manifest records and the URL scheme that locates them.

use crate::artefact::revision::Revision;
use crate::artefact::sha256_digest::Sha256Digest;
use crate::catalog::ArtifactDescriptor;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Default raw-content root of the upstream repository.
pub const DEFAULT_BASE_URL: &str = "https://github.com/nrfconnect/sdk-nrfxlib/raw";

/// Builds download and documentation URLs pinned to one revision.
///
/// # Examples
///
/// ```
/// use module_manifest::artefact::revision::Revision;
/// use module_manifest::manifest::record::RevisionUrls;
///
/// let revision = Revision::try_from("deadbeef").unwrap();
/// let urls = RevisionUrls::new("https://example.test/raw/", revision);
/// assert_eq!(
///     urls.artifact_url("fw_bins", "default/nrf70.bin"),
///     "https://example.test/raw/deadbeef/fw_bins/default/nrf70.bin"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionUrls {
    root: String,
    revision: Revision,
}

impl RevisionUrls {
    /// Pin `base_url` to `revision`. Trailing slashes on the base are ignored.
    #[must_use]
    pub fn new(base_url: &str, revision: Revision) -> Self {
        let root = format!("{}/{revision}", base_url.trim_end_matches('/'));
        Self { root, revision }
    }

    /// The revision every URL is pinned to.
    #[must_use]
    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    /// URL of an artefact stored at `prefix/rpath`; an empty prefix is
    /// skipped.
    #[must_use]
    pub fn artifact_url(&self, prefix: &str, rpath: &str) -> String {
        let prefix = prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{}/{rpath}", self.root)
        } else {
            format!("{}/{prefix}/{rpath}", self.root)
        }
    }

    /// URL of a documentation path relative to the repository root.
    #[must_use]
    pub fn doc_url(&self, doc_path: &str) -> String {
        format!("{}/{doc_path}", self.root)
    }
}

/// One artefact after retrieval and hashing.
///
/// Field order in serialised output matches the template contract:
/// `path`, `rpath`, `version`, `sha256`, `description`, `url`, `doc_url`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedArtifact {
    /// Local install path.
    pub path: String,
    /// Remote path relative to the catalog prefix.
    pub rpath: String,
    /// Semantic version, when the artefact carries one.
    pub version: Option<String>,
    /// Digest of the bytes retrieved in this run.
    pub sha256: Sha256Digest,
    /// Human-readable description.
    pub description: String,
    /// Download URL pinned to the run's revision.
    pub url: String,
    /// Documentation URL pinned to the run's revision.
    pub doc_url: Option<String>,
}

impl ResolvedArtifact {
    /// Combine a descriptor with its resolved URLs and digest.
    #[must_use]
    pub fn new(
        descriptor: &ArtifactDescriptor,
        url: String,
        doc_url: Option<String>,
        sha256: Sha256Digest,
    ) -> Self {
        Self {
            path: descriptor.lpath().to_owned(),
            rpath: descriptor.rpath().to_owned(),
            version: descriptor.version().map(str::to_owned),
            sha256,
            description: descriptor.description().to_owned(),
            url,
            doc_url,
        }
    }
}

/// Resolved records keyed by artefact name, in catalog order.
///
/// Serialises as a mapping whose iteration order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestRecords {
    entries: Vec<(String, ResolvedArtifact)>,
}

impl ManifestRecords {
    /// Create an empty record set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Order of calls is the order of output.
    pub fn push(&mut self, name: impl Into<String>, artifact: ResolvedArtifact) {
        self.entries.push((name.into(), artifact));
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by artefact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolvedArtifact> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, artifact)| artifact)
    }

    /// Iterate over `(name, record)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedArtifact)> {
        self.entries
            .iter()
            .map(|(name, artifact)| (name.as_str(), artifact))
    }
}

impl Serialize for ManifestRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, artifact) in &self.entries {
            map.serialize_entry(name, artifact)?;
        }
        map.end()
    }
}
