//! Configuration for the gridsite CLI.
//!
//! Provides the [`SiteConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `GRIDSITE_CONFIG` environment variable
//! 3. XDG default: `~/.config/gridsite/config.toml`
//! 4. Built-in defaults

use confyg::{env, Confygery};
use gridsite_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the gridsite CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project name, used for log context and generated output.
    pub project_name: String,

    /// Directory the content tree is written to.
    pub out_dir: String,

    /// Collections to fetch and export, in output order.
    pub collections: Vec<CollectionConfig>,
}

/// A single named collection backed by one upstream table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Collection name, used as the output subdirectory.
    pub name: String,

    /// Upstream table the records come from.
    pub table: String,

    /// Sort pages by start date before writing.
    #[serde(default)]
    pub sort_by_date: bool,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project_name: "gridsite".to_string(),
            out_dir: "content".to_string(),
            collections: vec![
                CollectionConfig {
                    name: "events".to_string(),
                    table: "More Rain".to_string(),
                    sort_by_date: true,
                },
                CollectionConfig {
                    name: "articles".to_string(),
                    table: "Articles".to_string(),
                    sort_by_date: false,
                },
            ],
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl SiteConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `GRIDSITE_CONFIG` env var
    /// 3. XDG default: `~/.config/gridsite/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
                tracing::debug!(path = %path.display(), "site configuration loaded from file");
            }
        }

        let env_opts = env::Options::with_top_level("GRIDSITE");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. GRIDSITE_CONFIG env var
        if let Ok(path) = std::env::var("GRIDSITE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gridsite").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
