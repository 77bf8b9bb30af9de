//! Gridsite Airtable: the fetch collaborator.
//!
//! Provides the [`RecordSource`] seam the pipeline consumes, the production
//! [`AirtableClient`] (bearer auth, offset pagination, fail-loud errors), and
//! [`MockRecordSource`] for tests.
//!
//! Credentials are explicit values ([`AirtableConfig`]), built once from the
//! environment at process start and passed by parameter.

pub mod client;
pub mod config;
pub mod mock;
pub mod source;

pub use client::AirtableClient;
pub use config::{AirtableConfig, DEFAULT_API_BASE};
pub use mock::MockRecordSource;
pub use source::RecordSource;
