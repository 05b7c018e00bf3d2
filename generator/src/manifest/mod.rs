//! Manifest assembly, rendering, and output.
//!
//! - [`record`] — resolved records and revision-pinned URLs.
//! - [`render`] — Handlebars rendering of the record set.
//! - [`writer`] — atomic replacement of the output file.

pub mod record;
pub mod render;
pub mod writer;
