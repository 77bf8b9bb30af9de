//! Gridsite: an Airtable-backed content layer for static sites.
//!
//! This umbrella crate re-exports the component crates so applications can
//! depend on a single name:
//!
//! - `gridsite-core`: record model, slug derivation, normalization
//! - `gridsite-content`: markdown rendering, page assembly, content export
//! - `gridsite-airtable`: the upstream record source (feature `airtable`)
//!
//! The full pipeline: fetch raw rows through a `RecordSource`, normalize
//! them with [`Normalizer`], assemble [`ContentPage`]s, and export them with
//! [`ContentWriter`].

pub use gridsite_core::{
    Error, MemoryNotices, NormalizedRecord, Normalizer, NoticeSink, RawRecord, Result,
    SkippedRecord, TracingNotices, derive_slug, is_valid_slug,
};

pub use gridsite_content::{
    ContentPage, ContentWriter, EXCERPT_MAX_CHARS, IndexEntry, WriteReport, build_page,
    build_pages, plain_excerpt, render_html, sort_by_start_date,
};

#[cfg(feature = "airtable")]
pub use gridsite_airtable::{
    AirtableClient, AirtableConfig, DEFAULT_API_BASE, MockRecordSource, RecordSource,
};
