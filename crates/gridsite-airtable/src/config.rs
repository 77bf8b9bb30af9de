//! Airtable connection configuration.
//!
//! Credentials are materialized once, at process start, into an explicit
//! [`AirtableConfig`] value that is passed by parameter; nothing in the
//! fetch path reads the environment. A missing token or base id fails fast
//! with a configuration error before any fetch is attempted.

use gridsite_core::{Error, Result};

/// Production API root.
pub const DEFAULT_API_BASE: &str = "https://api.airtable.com/v0";

/// Connection settings for one Airtable base.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// Bearer token (personal access token or legacy API key).
    pub token: String,

    /// Base identifier (`app…`).
    pub base_id: String,

    /// API root, overridable for tests.
    pub api_base: String,
}

impl AirtableConfig {
    /// Create a config against the production API root.
    pub fn new(token: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_id: base_id.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Build from the process environment.
    ///
    /// Reads `AIRTABLE_TOKEN`, falling back to the older `AIRTABLE_API_KEY`
    /// name, and `AIRTABLE_BASE_ID`. Empty values count as unset. Returns a
    /// configuration error naming the missing variable so a build fails
    /// before producing a partial or empty site.
    pub fn from_env() -> Result<Self> {
        let token = non_empty_var("AIRTABLE_TOKEN")
            .or_else(|| non_empty_var("AIRTABLE_API_KEY"))
            .ok_or_else(|| Error::config("AIRTABLE_TOKEN (or AIRTABLE_API_KEY) is not set"))?;
        let base_id = non_empty_var("AIRTABLE_BASE_ID")
            .ok_or_else(|| Error::config("AIRTABLE_BASE_ID is not set"))?;

        tracing::debug!(base_id = %base_id, "airtable credentials resolved from environment");
        Ok(Self::new(token, base_id))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
