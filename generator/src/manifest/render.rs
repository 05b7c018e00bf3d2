//! Template rendering for manifest output.
//!
//! Templates are Handlebars files read from disk. Output is YAML, so HTML
//! escaping is disabled. Templates are parsed when loaded so a missing or
//! malformed template is reported before any artefact is downloaded.

use super::record::ManifestRecords;
use crate::artefact::revision::Revision;
use handlebars::Handlebars;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Template variable holding the revision the manifest is pinned to.
pub const REVISION_KEY: &str = "latest_sha";

/// Errors raised while loading or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read template {}: {source}", path.display())]
    Read {
        /// Path of the template file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The template is not valid Handlebars.
    #[error("malformed template {}: {reason}", path.display())]
    Parse {
        /// Path of the template file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// Rendering failed, for example because a helper rejected its input.
    #[error("failed to render template: {reason}")]
    Render {
        /// Renderer diagnostic.
        reason: String,
    },

    /// The record set could not be converted into template data.
    #[error("failed to build template context: {0}")]
    Context(#[from] serde_json::Error),
}

/// Build the data passed to the template.
///
/// The records land under `context_key` and the revision under
/// [`REVISION_KEY`].
///
/// # Errors
///
/// Returns [`TemplateError::Context`] if the records cannot be serialised.
pub fn template_context(
    context_key: &str,
    records: &ManifestRecords,
    revision: &Revision,
) -> Result<Value, TemplateError> {
    let mut context = Map::new();
    context.insert(context_key.to_owned(), serde_json::to_value(records)?);
    context.insert(
        REVISION_KEY.to_owned(),
        Value::String(revision.as_str().to_owned()),
    );
    Ok(Value::Object(context))
}

/// A parsed manifest template.
///
/// # Examples
///
/// ```
/// use module_manifest::manifest::render::ManifestTemplate;
/// use serde_json::json;
/// use std::path::Path;
///
/// let template = ManifestTemplate::parse(Path::new("inline"), "rev: {{latest_sha}}").unwrap();
/// let text = template.render(&json!({ "latest_sha": "deadbeef" })).unwrap();
/// assert_eq!(text, "rev: deadbeef");
/// ```
pub struct ManifestTemplate {
    name: String,
    registry: Handlebars<'static>,
}

impl fmt::Debug for ManifestTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestTemplate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ManifestTemplate {
    /// Read and parse the template at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Read`] if the file is missing or unreadable
    /// and [`TemplateError::Parse`] if it is not valid Handlebars.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(path, &source)
    }

    /// Parse `source`; `path` only labels diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] for malformed templates.
    pub fn parse(path: &Path, source: &str) -> Result<Self, TemplateError> {
        let name = path.display().to_string();
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(&name, source)
            .map_err(|e| TemplateError::Parse {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(Self { name, registry })
    }

    /// Render the template with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] when rendering fails.
    pub fn render(&self, data: &Value) -> Result<String, TemplateError> {
        self.registry
            .render(&self.name, data)
            .map_err(|e| TemplateError::Render {
                reason: e.to_string(),
            })
    }
}
