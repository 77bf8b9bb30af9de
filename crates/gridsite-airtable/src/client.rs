//! Airtable REST client.
//!
//! Lists records with bearer auth, following the response `offset` cursor
//! until the table is exhausted. Failures follow the error contract: non-2xx
//! answers surface the HTTP status text and response body, transport and
//! decode failures carry their source. No retries; a failed fetch fails the
//! build.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use gridsite_core::{Error, RawRecord, Result};

use crate::config::AirtableConfig;
use crate::source::RecordSource;

// ============================================================================
// Wire types
// ============================================================================

/// One page of the list-records response.
#[derive(Debug, Deserialize)]
struct RecordsPage {
    #[serde(default)]
    records: Vec<RawRecord>,
    /// Cursor for the next page; absent on the last page.
    offset: Option<String>,
}

// ============================================================================
// AirtableClient
// ============================================================================

/// HTTP [`RecordSource`] backed by the Airtable REST API.
pub struct AirtableClient {
    config: AirtableConfig,
    client: reqwest::Client,
}

impl AirtableClient {
    /// Create a client for the given connection settings.
    pub fn new(config: AirtableConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build the list-records URL for a table.
    ///
    /// Table names are pushed as path segments so names with spaces
    /// (e.g. "More Rain") are percent-encoded correctly.
    fn table_url(&self, table: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.api_base).map_err(|e| {
            Error::config(format!("invalid API base {:?}: {e}", self.config.api_base))
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                Error::config(format!(
                    "API base {:?} cannot carry path segments",
                    self.config.api_base
                ))
            })?;
            segments
                .pop_if_empty()
                .push(&self.config.base_id)
                .push(table);
        }
        Ok(url)
    }
}

#[async_trait]
impl RecordSource for AirtableClient {
    async fn list_records(&self, table: &str) -> Result<Vec<RawRecord>> {
        let url = self.table_url(table)?;
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(url.clone())
                .bearer_auth(&self.config.token);
            if let Some(cursor) = offset.as_deref() {
                request = request.query(&[("offset", cursor)]);
            }

            let response = request.send().await.map_err(|e| {
                Error::http_with_source(format!("Failed to fetch table {table:?}"), e)
            })?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(Error::fetch(status.to_string(), body));
            }

            let page: RecordsPage = response.json().await.map_err(|e| {
                Error::http_with_source(format!("Failed to decode records from table {table:?}"), e)
            })?;

            records.extend(page.records);
            tracing::debug!(
                table = %table,
                total = records.len(),
                more = page.offset.is_some(),
                "fetched records page"
            );

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(records)
    }
}

// ============================================================================
// Tests
// ============================================================================
