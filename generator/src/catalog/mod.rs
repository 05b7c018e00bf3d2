//! Artefact catalogs that feed manifest generation.
//!
//! A [`Catalog`] is a fixed, ordered list of [`ArtifactDescriptor`]s plus the
//! information needed to locate them upstream and to expose them to a
//! template. The shipped catalogs live in [`nordic_blobs`] and [`wifi_fw`].

pub mod nordic_blobs;
pub mod wifi_fw;

/// Static description of one downloadable artefact.
///
/// # Examples
///
/// ```
/// use module_manifest::catalog::ArtifactDescriptor;
///
/// let descriptor = ArtifactDescriptor::new("a", "Test blob", "a.bin", "blobs/a.bin")
///     .with_version("1.0.0");
/// assert_eq!(descriptor.version(), Some("1.0.0"));
/// assert_eq!(descriptor.doc_path(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    name: String,
    description: String,
    version: Option<String>,
    rpath: String,
    lpath: String,
    doc_path: Option<String>,
}

impl ArtifactDescriptor {
    /// Create a descriptor with no version and no documentation path.
    ///
    /// `rpath` is relative to the catalog's remote prefix; `lpath` is where
    /// the downstream module system installs the blob.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        rpath: impl Into<String>,
        lpath: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: None,
            rpath: rpath.into(),
            lpath: lpath.into(),
            doc_path: None,
        }
    }

    /// Attach a semantic version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Attach a documentation path, relative to the repository root.
    #[must_use]
    pub fn with_doc_path(mut self, doc_path: impl Into<String>) -> Self {
        self.doc_path = Some(doc_path.into());
        self
    }

    /// Unique key of the artefact within its catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Semantic version, when the artefact carries one.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Remote path relative to the catalog prefix.
    #[must_use]
    pub fn rpath(&self) -> &str {
        &self.rpath
    }

    /// Local install path.
    #[must_use]
    pub fn lpath(&self) -> &str {
        &self.lpath
    }

    /// Documentation path relative to the repository root.
    #[must_use]
    pub fn doc_path(&self) -> Option<&str> {
        self.doc_path.as_deref()
    }
}

/// An ordered set of artefacts rendered into one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: &'static str,
    context_key: &'static str,
    remote_prefix: &'static str,
    artifacts: Vec<ArtifactDescriptor>,
}

impl Catalog {
    /// Create a catalog.
    ///
    /// `context_key` names the template variable that receives the records;
    /// `remote_prefix` sits between the revision and each descriptor's
    /// `rpath` in download URLs and may be empty.
    #[must_use]
    pub fn new(
        name: &'static str,
        context_key: &'static str,
        remote_prefix: &'static str,
        artifacts: Vec<ArtifactDescriptor>,
    ) -> Self {
        Self {
            name,
            context_key,
            remote_prefix,
            artifacts,
        }
    }

    /// Catalog name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Template variable holding the resolved records.
    #[must_use]
    pub fn context_key(&self) -> &'static str {
        self.context_key
    }

    /// Path prefix applied to every descriptor's `rpath` upstream.
    #[must_use]
    pub fn remote_prefix(&self) -> &'static str {
        self.remote_prefix
    }

    /// Descriptors in declaration order.
    #[must_use]
    pub fn artifacts(&self) -> &[ArtifactDescriptor] {
        &self.artifacts
    }
}
