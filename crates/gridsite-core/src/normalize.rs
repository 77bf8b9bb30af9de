//! Record normalization pipeline.
//!
//! The [`Normalizer`] turns [`RawRecord`]s into [`NormalizedRecord`]s: it
//! resolves the title column, derives the slug, and copies the known optional
//! columns through with explicit presence semantics. Records whose title
//! yields no slug are skipped, and each skip is reported through an injected
//! [`NoticeSink`] so operators can fix the upstream row; skips never halt
//! the batch.

use std::sync::{Arc, Mutex};

use crate::record::{NormalizedRecord, RawRecord};
use crate::slug::derive_slug;

// ============================================================================
// Column aliases
// ============================================================================

// Tables name the same concept differently (events say "Location" and
// "Date", articles say "Header" and "Post Type"). First present wins.
const TITLE_COLUMNS: &[&str] = &["Title", "Header", "Name"];
const LOCATION_COLUMNS: &[&str] = &["Location", "Venue"];
const START_DATE_COLUMNS: &[&str] = &["Start Date", "Date"];
const CATEGORY_COLUMNS: &[&str] = &["Category", "Post Type"];
const QUOTE_COLUMNS: &[&str] = &["Quote", "Pull Quote"];
const SUMMARY_COLUMNS: &[&str] = &["Summary", "Description"];
const LINK_COLUMNS: &[&str] = &["Link", "Original Link", "URL"];

fn first_text<'a>(raw: &'a RawRecord, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| raw.text(name))
}

// ============================================================================
// NoticeSink
// ============================================================================

/// Observability hook for non-fatal pipeline diagnostics.
///
/// Implementations must be cheap and must not fail: a notice is advisory,
/// emitted once per skipped record, and processing always continues.
pub trait NoticeSink: Send + Sync {
    /// Called when a record is dropped because its title yields no slug.
    ///
    /// `title` is the raw title as found in the row, or `None` when no title
    /// column was present at all.
    fn record_skipped(&self, record_id: &str, title: Option<&str>);
}

/// Default sink: logs each skip at warn level with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn record_skipped(&self, record_id: &str, title: Option<&str>) {
        tracing::warn!(record = %record_id, title = ?title, "record skipped: no usable slug");
    }
}

/// One skip notice captured by [`MemoryNotices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Identifier of the dropped record.
    pub record_id: String,
    /// Raw title that failed slug derivation, if one was present.
    pub title: Option<String>,
}

/// In-memory sink that captures notices for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryNotices {
    skipped: Mutex<Vec<SkippedRecord>>,
}

impl MemoryNotices {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices captured so far, in emission order.
    pub fn skipped(&self) -> Vec<SkippedRecord> {
        self.skipped.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl NoticeSink for MemoryNotices {
    fn record_skipped(&self, record_id: &str, title: Option<&str>) {
        if let Ok(mut skipped) = self.skipped.lock() {
            skipped.push(SkippedRecord {
                record_id: record_id.to_string(),
                title: title.map(str::to_string),
            });
        }
    }
}

// ============================================================================
// Normalizer
// ============================================================================

/// Stateless record normalizer with an injected notice sink.
///
/// Safe to share and to call concurrently on disjoint inputs: it holds no
/// mutable state of its own.
///
/// # Examples
///
/// ```
/// use gridsite_core::{Normalizer, RawRecord};
///
/// let normalizer = Normalizer::new();
/// let row = RawRecord::new("rec1").with_field("Title", "Hurricane Katrina 2005");
/// let record = normalizer.normalize(&row).unwrap();
/// assert_eq!(record.slug, "hurricane-katrina-2005");
/// ```
#[derive(Clone)]
pub struct Normalizer {
    notices: Arc<dyn NoticeSink>,
}

impl Normalizer {
    /// Create a normalizer that reports skips through [`TracingNotices`].
    pub fn new() -> Self {
        Self {
            notices: Arc::new(TracingNotices),
        }
    }

    /// Replace the notice sink.
    pub fn with_notices(mut self, notices: Arc<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    /// Normalize one record, or skip it when no slug can be derived.
    ///
    /// Skipping is the only filtering rule: every other field is copied
    /// through verbatim, absent columns staying absent.
    pub fn normalize(&self, raw: &RawRecord) -> Option<NormalizedRecord> {
        let raw_title = first_text(raw, TITLE_COLUMNS);
        let slug = match derive_slug(raw_title) {
            Some(slug) => slug,
            None => {
                self.notices.record_skipped(&raw.id, raw_title);
                return None;
            }
        };

        // derive_slug only succeeds on a non-blank title.
        let title = raw_title.unwrap_or_default().trim().to_string();

        Some(NormalizedRecord {
            id: raw.id.clone(),
            slug,
            title,
            location: first_text(raw, LOCATION_COLUMNS).map(str::to_string),
            start_date: first_text(raw, START_DATE_COLUMNS).map(str::to_string),
            end_date: raw.text("End Date").map(str::to_string),
            category: first_text(raw, CATEGORY_COLUMNS).map(str::to_string),
            tags: raw.text_list("Tags"),
            quote: first_text(raw, QUOTE_COLUMNS).map(str::to_string),
            summary: first_text(raw, SUMMARY_COLUMNS).map(str::to_string),
            image_url: raw
                .text("Image URL")
                .or_else(|| raw.attachment_url("Image"))
                .map(str::to_string),
            link: first_text(raw, LINK_COLUMNS).map(str::to_string),
            published: raw.flag("Published"),
            notes: raw.text("Notes").map(str::to_string),
            body: raw.text("Body").map(str::to_string),
        })
    }

    /// Normalize a batch, preserving input order of the survivors.
    ///
    /// Records sharing a derived slug all survive, in input order. Collision
    /// handling belongs to the consumer.
    pub fn normalize_all<I>(&self, raws: I) -> Vec<NormalizedRecord>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        raws.into_iter()
            .filter_map(|raw| self.normalize(&raw))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
