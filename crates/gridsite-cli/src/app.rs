//! Gridsite application wiring.
//!
//! Connects the site configuration, the record source, the normalizer,
//! and the content writer behind the CLI commands.

use crate::cli::{CliArgs, Command};
use crate::config::SiteConfig;
use crate::config_handlers;
use gridsite_airtable::{AirtableClient, AirtableConfig, RecordSource};
use gridsite_content::{ContentWriter, build_pages, sort_by_start_date};
use gridsite_core::{Normalizer, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Logging
// ============================================================================

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// ============================================================================
// Reports
// ============================================================================

/// Per-collection counts from a build or check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionReport {
    /// Collection name.
    pub name: String,

    /// Rows fetched from the upstream table.
    pub fetched: usize,

    /// Records that normalized successfully.
    pub emitted: usize,

    /// Rows dropped for lacking a usable slug.
    pub skipped: usize,

    /// Files created or rewritten (zero for check and dry runs).
    pub written: usize,

    /// Files already up to date (zero for check and dry runs).
    pub unchanged: usize,
}

// ============================================================================
// App
// ============================================================================

/// The wired-up application: site config plus a record source.
pub struct App {
    site: SiteConfig,
    source: Arc<dyn RecordSource>,
}

impl App {
    /// Create an application over an explicit record source.
    pub fn new(site: SiteConfig, source: Arc<dyn RecordSource>) -> Self {
        Self { site, source }
    }

    /// Create with the standard wiring: site config from file/env plus an
    /// Airtable client configured from the environment.
    ///
    /// Fails before any fetch when credentials are missing.
    pub fn from_config(config_path: Option<&str>) -> Result<Self> {
        let site = SiteConfig::load(config_path)?;
        let airtable = AirtableConfig::from_env()?;
        Ok(Self::new(site, Arc::new(AirtableClient::new(airtable))))
    }

    /// Get a reference to the site config.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Fetch, normalize, and export every configured collection.
    ///
    /// Returns one report per collection, in config order. With `dry_run`
    /// the output paths are printed and nothing is written.
    pub async fn build(&self, out: Option<&str>, dry_run: bool) -> Result<Vec<CollectionReport>> {
        let out_dir = out.unwrap_or(&self.site.out_dir);
        let writer = ContentWriter::new(out_dir);
        let normalizer = Normalizer::new();
        let mut reports = Vec::with_capacity(self.site.collections.len());

        for collection in &self.site.collections {
            let raws = self.source.list_records(&collection.table).await?;
            let fetched = raws.len();
            let records = normalizer.normalize_all(raws);
            let mut pages = build_pages(&collection.name, &records);
            if collection.sort_by_date {
                sort_by_start_date(&mut pages);
            }

            let mut report = CollectionReport {
                name: collection.name.clone(),
                fetched,
                emitted: records.len(),
                skipped: fetched - records.len(),
                ..Default::default()
            };

            if dry_run {
                for page in &pages {
                    println!(
                        "  would write {}.json",
                        writer.out_dir().join(&page.path).display()
                    );
                }
                println!(
                    "  would write {}",
                    writer.out_dir().join(&collection.name).join("index.json").display()
                );
            } else {
                let write = writer.write_collection(&collection.name, &pages).await?;
                report.written = write.written;
                report.unchanged = write.unchanged;
            }

            reports.push(report);
        }

        Ok(reports)
    }

    /// Fetch and normalize every collection, reporting counts without writing.
    pub async fn check(&self) -> Result<Vec<CollectionReport>> {
        let normalizer = Normalizer::new();
        let mut reports = Vec::with_capacity(self.site.collections.len());

        for collection in &self.site.collections {
            let raws = self.source.list_records(&collection.table).await?;
            let fetched = raws.len();
            let records = normalizer.normalize_all(raws);
            reports.push(CollectionReport {
                name: collection.name.clone(),
                fetched,
                emitted: records.len(),
                skipped: fetched - records.len(),
                ..Default::default()
            });
        }

        Ok(reports)
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Run the CLI with the given arguments.
pub async fn run(args: CliArgs) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    match args.command {
        Some(Command::Build { out, dry_run }) => {
            let app = App::from_config(args.config.as_deref())?;
            tracing::info!(project = %app.site().project_name, dry_run, "starting build");
            let reports = app.build(out.as_deref(), dry_run).await?;
            for report in &reports {
                if dry_run {
                    println!(
                        "{}: fetched {}, emitted {}, skipped {} (dry run)",
                        report.name, report.fetched, report.emitted, report.skipped
                    );
                } else {
                    println!(
                        "{}: fetched {}, emitted {}, skipped {}, wrote {} ({} unchanged)",
                        report.name,
                        report.fetched,
                        report.emitted,
                        report.skipped,
                        report.written,
                        report.unchanged
                    );
                }
            }
            Ok(())
        }
        Some(Command::Check) => {
            let app = App::from_config(args.config.as_deref())?;
            tracing::info!(project = %app.site().project_name, "checking collections");
            let reports = app.check().await?;
            for report in &reports {
                println!(
                    "{}: fetched {}, emitted {}, skipped {}",
                    report.name, report.fetched, report.emitted, report.skipped
                );
            }
            Ok(())
        }
        Some(Command::Version) => {
            println!("gridsite {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Config(config_cmd)) => {
            config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
        }
        None => {
            println!("gridsite {} — use --help for usage", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use gridsite_airtable::MockRecordSource;
    use gridsite_core::RawRecord;

    fn sample_source() -> Arc<dyn RecordSource> {
        let events = vec![
            RawRecord::new("rec1")
                .with_field("Title", "Later Show")
                .with_field("Start Date", "2024-06-15"),
            RawRecord::new("rec2")
                .with_field("Title", "Earlier Show")
                .with_field("Start Date", "2024-01-10"),
            RawRecord::new("rec3").with_field("Notes", "row without a title"),
        ];
        let articles = vec![RawRecord::new("rec4")
            .with_field("Header", "A Field Guide")
            .with_field("Body", "Some *markdown* text.")];
        Arc::new(
            MockRecordSource::new()
                .with_table("More Rain", events)
                .with_table("Articles", articles),
        )
    }

    fn test_site(out_dir: &str) -> SiteConfig {
        SiteConfig {
            out_dir: out_dir.to_string(),
            ..Default::default()
        }
    }

    // ------------------------------------------------------------------------
    // App wiring tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_app_site_exposes_config() {
        let app = App::new(test_site("content"), sample_source());
        assert_eq!(app.site().project_name, "gridsite");
        assert_eq!(app.site().out_dir, "content");
        assert_eq!(app.site().collections.len(), 2);
    }

    // ------------------------------------------------------------------------
    // App::build tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_app_build_writes_collections() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("content");
        let app = App::new(test_site(out.to_str().unwrap()), sample_source());

        let reports = app.build(None, false).await.unwrap();
        assert_eq!(reports.len(), 2);

        let events = &reports[0];
        assert_eq!(events.name, "events");
        assert_eq!(events.fetched, 3);
        assert_eq!(events.emitted, 2);
        assert_eq!(events.skipped, 1);
        assert_eq!(events.written, 3); // two documents plus the index

        let articles = &reports[1];
        assert_eq!(articles.name, "articles");
        assert_eq!(articles.fetched, 1);
        assert_eq!(articles.emitted, 1);
        assert_eq!(articles.written, 2);

        assert!(out.join("events/later-show.json").exists());
        assert!(out.join("events/earlier-show.json").exists());
        assert!(out.join("articles/a-field-guide.json").exists());
    }

    #[tokio::test]
    async fn test_app_build_sorts_events_by_date() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("content");
        let app = App::new(test_site(out.to_str().unwrap()), sample_source());
        app.build(None, false).await.unwrap();

        let index: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(out.join("events/index.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(index[0]["slug"], "earlier-show");
        assert_eq!(index[1]["slug"], "later-show");
    }

    #[tokio::test]
    async fn test_app_build_renders_article_body() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("content");
        let app = App::new(test_site(out.to_str().unwrap()), sample_source());
        app.build(None, false).await.unwrap();

        let doc: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(out.join("articles/a-field-guide.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(doc["body_html"], "<p>Some <em>markdown</em> text.</p>\n");
        assert_eq!(doc["excerpt"], "Some markdown text.");
    }

    #[tokio::test]
    async fn test_app_build_out_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let configured = dir.path().join("configured");
        let other = dir.path().join("other");
        let app = App::new(test_site(configured.to_str().unwrap()), sample_source());

        app.build(Some(other.to_str().unwrap()), false).await.unwrap();
        assert!(other.join("events/index.json").exists());
        assert!(!configured.exists());
    }

    #[tokio::test]
    async fn test_app_build_dry_run_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("content");
        let app = App::new(test_site(out.to_str().unwrap()), sample_source());

        let reports = app.build(None, true).await.unwrap();
        assert_eq!(reports[0].fetched, 3);
        assert_eq!(reports[0].written, 0);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_app_build_unknown_table_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let source: Arc<dyn RecordSource> = Arc::new(MockRecordSource::new());
        let app = App::new(test_site(dir.path().to_str().unwrap()), source);

        let err = app.build(None, false).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    // ------------------------------------------------------------------------
    // App::check tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_app_check_counts_without_writing() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("content");
        let app = App::new(test_site(out.to_str().unwrap()), sample_source());

        let reports = app.check().await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].fetched, 3);
        assert_eq!(reports[0].emitted, 2);
        assert_eq!(reports[0].skipped, 1);
        assert_eq!(reports[0].written, 0);
        assert!(!out.exists());
    }

    // ------------------------------------------------------------------------
    // Logging tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_init_logging_default() {
        // Should not panic
        init_logging(false, false);
    }

    #[test]
    fn test_init_logging_verbose() {
        init_logging(true, false);
    }

    #[test]
    fn test_init_logging_quiet() {
        init_logging(false, true);
    }

    // ------------------------------------------------------------------------
    // run() tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_run_version_command() {
        let args = CliArgs::parse_from(["test", "version"]);
        let result = run(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_no_command() {
        let args = CliArgs::parse_from(["test"]);
        let result = run(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_config_path_command() {
        let args = CliArgs::parse_from(["test", "config", "path"]);
        let result = run(args).await;
        assert!(result.is_ok());
    }
}
