//! The record source seam.

use async_trait::async_trait;
use gridsite_core::{RawRecord, Result};

/// Anything that can list the raw records of a named table.
///
/// This is the boundary between fetching and the normalization pipeline:
/// the CLI runs against a `dyn RecordSource`, so tests swap the HTTP client
/// for [`MockRecordSource`](crate::MockRecordSource) without touching the
/// pipeline.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record of `table`, in source order.
    ///
    /// Implementations return the full materialized result set; expected
    /// table sizes are tens to low hundreds of rows.
    async fn list_records(&self, table: &str) -> Result<Vec<RawRecord>>;
}
