//! Page assembly: from normalized records to exportable content pages.
//!
//! A page is a normalized record addressed by `<collection>/<slug>`, with
//! its markdown body rendered and an excerpt derived for listings.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use gridsite_core::NormalizedRecord;

use crate::markdown::{self, EXCERPT_MAX_CHARS};

// ============================================================================
// ContentPage
// ============================================================================

/// One exported content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    /// Page path: `<collection>/<slug>`.
    pub path: String,

    /// The normalized record, flattened into the document.
    #[serde(flatten)]
    pub record: NormalizedRecord,

    /// Rendered markdown body, present iff the record has a body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// Plain-text excerpt for listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Assemble one page.
///
/// The excerpt prefers the body (stripped to plain text); a record without a
/// body, or whose body reduces to nothing (image-only, say), falls back to
/// its summary.
pub fn build_page(collection: &str, record: &NormalizedRecord) -> ContentPage {
    let body_html = record.body.as_deref().map(markdown::render_html);
    let excerpt = record
        .body
        .as_deref()
        .map(|body| markdown::plain_excerpt(body, EXCERPT_MAX_CHARS))
        .filter(|excerpt| !excerpt.is_empty())
        .or_else(|| record.summary.clone());

    ContentPage {
        path: format!("{collection}/{}", record.slug),
        record: record.clone(),
        body_html,
        excerpt,
    }
}

/// Assemble every record of a collection, preserving record order.
pub fn build_pages(collection: &str, records: &[NormalizedRecord]) -> Vec<ContentPage> {
    records
        .iter()
        .map(|record| build_page(collection, record))
        .collect()
}

// ============================================================================
// Ordering
// ============================================================================

/// Sort pages by start date, ascending, keeping undated pages after the
/// dated ones in their original relative order.
pub fn sort_by_start_date(pages: &mut [ContentPage]) {
    pages.sort_by_key(|page| match parse_start_date(page.record.start_date.as_deref()) {
        Some(date) => (0u8, Some(date)),
        None => (1u8, None),
    });
}

// Source tables hold either plain dates or full timestamps.
fn parse_start_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

// ============================================================================
// Tests
// ============================================================================
