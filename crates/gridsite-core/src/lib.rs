//! Gridsite Core: record model, slug derivation, and normalization.
//!
//! This crate is the leaf of the workspace (dependency level 0): no async,
//! no I/O, no configuration. It defines the shared [`Error`] type and the
//! pipeline that turns raw tabular rows into normalized content records.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: Raw and normalized record types
//! - [`slug`]: Slug derivation from titles
//! - [`normalize`]: The normalization pipeline and notice sinks

#![doc = include_str!("../README.md")]

pub mod error;
pub mod normalize;
pub mod record;
pub mod slug;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use normalize::{MemoryNotices, Normalizer, NoticeSink, SkippedRecord, TracingNotices};
pub use record::{NormalizedRecord, RawRecord};
pub use slug::{derive_slug, is_valid_slug};
