//! Content export.
//!
//! Writes one pretty-printed JSON document per page plus a collection
//! `index.json`, under `<out>/<collection>/`. Files are only rewritten when
//! their content hash changes, so downstream incremental site builds see no
//! mtime churn on unchanged pages.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gridsite_core::{Error, Result};

use crate::page::ContentPage;

// ============================================================================
// Types
// ============================================================================

/// Per-collection write statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Files created or rewritten.
    pub written: usize,
    /// Files skipped because their content was identical.
    pub unchanged: usize,
}

/// One row of a collection's `index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Page slug.
    pub slug: String,
    /// Page title.
    pub title: String,
    /// Page path (`<collection>/<slug>`).
    pub path: String,
    /// Start date, when the page has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

// ============================================================================
// ContentWriter
// ============================================================================

/// Writes assembled pages into the output tree.
#[derive(Debug, Clone)]
pub struct ContentWriter {
    out_dir: PathBuf,
}

impl ContentWriter {
    /// Create a writer rooted at `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Root of the output tree.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write one collection: a document per page plus `index.json`.
    ///
    /// Pages are written in input order; a duplicate slug logs a warning and
    /// the later page wins.
    pub async fn write_collection(
        &self,
        collection: &str,
        pages: &[ContentPage],
    ) -> Result<WriteReport> {
        let dir = self.out_dir.join(collection);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io_with_path(e, &dir))?;

        let mut report = WriteReport::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for page in pages {
            let slug = page.record.slug.as_str();
            if !seen.insert(slug) {
                tracing::warn!(
                    collection = %collection,
                    slug = %slug,
                    "duplicate slug: later page overwrites the earlier one"
                );
            }

            let path = dir.join(format!("{slug}.json"));
            let json = serde_json::to_string_pretty(page)
                .map_err(|e| Error::serialization(e.to_string()))?;
            write_if_changed(&path, json.as_bytes(), &mut report).await?;
        }

        let index: Vec<IndexEntry> = pages
            .iter()
            .map(|page| IndexEntry {
                slug: page.record.slug.clone(),
                title: page.record.title.clone(),
                path: page.path.clone(),
                start_date: page.record.start_date.clone(),
            })
            .collect();
        let json =
            serde_json::to_string_pretty(&index).map_err(|e| Error::serialization(e.to_string()))?;
        write_if_changed(&dir.join("index.json"), json.as_bytes(), &mut report).await?;

        tracing::info!(
            collection = %collection,
            written = report.written,
            unchanged = report.unchanged,
            "collection exported"
        );
        Ok(report)
    }
}

async fn write_if_changed(path: &Path, bytes: &[u8], report: &mut WriteReport) -> Result<()> {
    if let Ok(existing) = tokio::fs::read(path).await {
        if blake3::hash(&existing) == blake3::hash(bytes) {
            report.unchanged += 1;
            return Ok(());
        }
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    report.written += 1;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::page::build_pages;
    use gridsite_core::{Normalizer, RawRecord};

    fn sample_pages() -> Vec<ContentPage> {
        let rows = vec![
            RawRecord::new("rec1")
                .with_field("Title", "Opening Night")
                .with_field("Date", "2024-06-01"),
            RawRecord::new("rec2")
                .with_field("Title", "Closing Night")
                .with_field("Body", "A **grand** finale."),
        ];
        let records = Normalizer::new().normalize_all(rows);
        build_pages("events", &records)
    }

    #[tokio::test]
    async fn test_write_collection_creates_documents_and_index() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ContentWriter::new(dir.path());
        assert_eq!(writer.out_dir(), dir.path());

        let report = writer
            .write_collection("events", &sample_pages())
            .await
            .unwrap();
        assert_eq!(report.written, 3);
        assert_eq!(report.unchanged, 0);

        let page_path = dir.path().join("events/opening-night.json");
        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&page_path).unwrap()).unwrap();
        assert_eq!(doc["title"], "Opening Night");
        assert_eq!(doc["path"], "events/opening-night");

        let index_path = dir.path().join("events/index.json");
        let index: Vec<IndexEntry> =
            serde_json::from_str(&std::fs::read_to_string(&index_path).unwrap()).unwrap();
        let slugs: Vec<&str> = index.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["opening-night", "closing-night"]);
        assert_eq!(index[0].start_date.as_deref(), Some("2024-06-01"));
    }

    #[tokio::test]
    async fn test_write_collection_skips_unchanged_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ContentWriter::new(dir.path());
        let pages = sample_pages();

        let first = writer.write_collection("events", &pages).await.unwrap();
        assert_eq!(first.written, 3);

        let second = writer.write_collection("events", &pages).await.unwrap();
        assert_eq!(second.written, 0);
        assert_eq!(second.unchanged, 3);
    }

    #[tokio::test]
    async fn test_write_collection_rewrites_changed_pages() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ContentWriter::new(dir.path());

        let mut pages = sample_pages();
        writer.write_collection("events", &pages).await.unwrap();

        pages[0].record.location = Some("Tipitina's".to_string());
        let report = writer.write_collection("events", &pages).await.unwrap();
        // One page changed; the other page and the index are untouched.
        assert_eq!(report.written, 1);
        assert_eq!(report.unchanged, 2);
    }

    #[tokio::test]
    async fn test_write_collection_duplicate_slug_last_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ContentWriter::new(dir.path());

        let rows = vec![
            RawRecord::new("rec1")
                .with_field("Title", "Same Name")
                .with_field("Notes", "first"),
            RawRecord::new("rec2")
                .with_field("Title", "Same   Name")
                .with_field("Notes", "second"),
        ];
        let records = Normalizer::new().normalize_all(rows);
        let pages = build_pages("events", &records);

        writer.write_collection("events", &pages).await.unwrap();

        let doc: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("events/same-name.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(doc["notes"], "second");
        assert_eq!(doc["id"], "rec2");
    }

    #[tokio::test]
    async fn test_write_collection_empty_collection_still_writes_index() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ContentWriter::new(dir.path());

        let report = writer.write_collection("events", &[]).await.unwrap();
        assert_eq!(report.written, 1);

        let index: Vec<IndexEntry> = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("events/index.json")).unwrap(),
        )
        .unwrap();
        assert!(index.is_empty());
    }
}
