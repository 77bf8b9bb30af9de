//! Mock record source for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use gridsite_core::{Error, RawRecord, Result};

use crate::source::RecordSource;

/// Mock [`RecordSource`] serving canned records from memory.
///
/// Useful for pipeline and CLI tests without network access. Tables answer
/// with their registered records; unknown tables answer with the same
/// not-found fetch error the real API produces.
///
/// # Examples
///
/// ```
/// use gridsite_airtable::MockRecordSource;
/// use gridsite_core::RawRecord;
///
/// let source = MockRecordSource::new()
///     .with_table("Events", vec![RawRecord::new("rec1").with_field("Title", "Opening Night")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRecordSource {
    tables: HashMap<String, Vec<RawRecord>>,
}

impl MockRecordSource {
    /// Create a mock with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table and its records (builder style).
    pub fn with_table(mut self, table: impl Into<String>, records: Vec<RawRecord>) -> Self {
        self.tables.insert(table.into(), records);
        self
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn list_records(&self, table: &str) -> Result<Vec<RawRecord>> {
        self.tables.get(table).cloned().ok_or_else(|| {
            Error::fetch(
                "404 Not Found",
                format!("table {table:?} is not registered in this mock"),
            )
        })
    }
}
