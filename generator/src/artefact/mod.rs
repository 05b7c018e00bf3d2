//! Artefact value types, digest computation, and retrieval.
//!
//! # Sub-modules
//!
//! - [`error`] — Semantic error types for validation failures.
//! - [`revision`] — Source revision newtype (`Revision`).
//! - [`sha256_digest`] — SHA-256 digest newtype and computation.
//! - [`download`] — Artefact fetch trait and HTTP implementation.

pub mod download;
pub mod error;
pub mod revision;
pub mod sha256_digest;
