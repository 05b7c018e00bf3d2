//! Zephyr module manifest generator.
//!
//! This crate downloads firmware blobs from a pinned upstream revision,
//! computes their SHA-256 digests, and renders a `module.yml` manifest from
//! a template. It backs the `update-blobs` and `update-wifi-fw` binaries and
//! can be driven programmatically with an injected fetcher for testing.
//!
//! # Modules
//!
//! - [`artefact`] - Revision and digest newtypes, artefact retrieval
//! - [`catalog`] - Artefact descriptors and the shipped catalogs
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types for a generation run
//! - [`logging`] - Diagnostic logging setup
//! - [`manifest`] - Record assembly, template rendering, atomic output
//! - [`pipeline`] - Fetch, hash, render, and write orchestration

pub mod artefact;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod pipeline;
