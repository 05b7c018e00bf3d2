//! Source revision newtype for URL construction.
//!
//! A revision is whatever commit reference the upstream host accepts in the
//! raw-content path: a full or abbreviated SHA, a tag, or a branch name. It
//! is otherwise opaque, but it must be safe to splice into a URL path.

use super::error::{ArtefactError, Result};
use serde::Serialize;
use std::fmt;

/// A validated source-control revision.
///
/// # Examples
///
/// ```
/// use module_manifest::artefact::revision::Revision;
///
/// let rev: Revision = "deadbeef".try_into().unwrap();
/// assert_eq!(rev.as_str(), "deadbeef");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Return the revision as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Revision {
    type Error = ArtefactError;

    fn try_from(value: &str) -> Result<Self> {
        validate_revision(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for Revision {
    type Error = ArtefactError;

    fn try_from(value: String) -> Result<Self> {
        validate_revision(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> ArtefactError {
    ArtefactError::InvalidRevision {
        value: value.to_owned(),
        reason: reason.into(),
    }
}

/// Validate that `value` can be used as a revision path segment.
fn validate_revision(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(value, "revision must not be empty"));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return Err(invalid(
            value,
            format!("whitespace or control character {bad:?}"),
        ));
    }
    if value.starts_with('/') || value.ends_with('/') {
        return Err(invalid(value, "revision must not start or end with '/'"));
    }
    if value.contains("..") {
        return Err(invalid(value, "revision must not contain '..'"));
    }
    Ok(())
}
