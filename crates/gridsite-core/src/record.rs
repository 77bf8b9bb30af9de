//! Record types for the content pipeline.
//!
//! [`RawRecord`] mirrors one row as the tabular source returns it: an opaque
//! mapping from human-readable column names to JSON values. Typed accessors
//! perform presence-checked extraction without coercing anything; a numeric
//! cell is not a text cell, an absent column stays absent.
//!
//! [`NormalizedRecord`] is the pipeline's output: a required slug and title
//! plus a fixed set of optional pass-through fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// RawRecord
// ============================================================================

/// One row as returned by the tabular source. Read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Upstream record identifier (`rec…`).
    pub id: String,

    /// Upstream creation timestamp, passed through untouched.
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,

    /// Cell values keyed by column name. Columns with empty cells are omitted
    /// by the source, so presence implies a value.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RawRecord {
    /// Create a record with an empty field map.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_time: None,
            fields: Map::new(),
        }
    }

    /// Add a field value (builder style, used heavily in tests and mocks).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Text cell, if the column is present and holds a string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.as_str()
    }

    /// String-list cell (multi-select columns). Non-string elements are
    /// ignored rather than coerced.
    pub fn text_list(&self, name: &str) -> Option<Vec<String>> {
        let items = self.fields.get(name)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Boolean cell (checkbox columns).
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.fields.get(name)?.as_bool()
    }

    /// URL of the first attachment in an attachment-list cell.
    pub fn attachment_url(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)?
            .as_array()?
            .first()?
            .get("url")?
            .as_str()
    }
}

// ============================================================================
// NormalizedRecord
// ============================================================================

/// The pipeline's output: one content record with a derived slug.
///
/// Every emitted record has a non-empty `slug` and `title`. The optional
/// fields are copied verbatim from the source row; absent stays absent and
/// is omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Upstream record identifier.
    pub id: String,

    /// URL-path-safe identifier derived from the title.
    pub slug: String,

    /// Trimmed title.
    pub title: String,

    /// Venue or place name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Start date or single date, as the source formatted it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// End date, when the source distinguishes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Category or post type label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Multi-select tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Pull quote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,

    /// Short summary or description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Image URL, from a URL column or the first attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// External link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Publication checkbox, passed through unfiltered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Markdown body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
