//! Gridsite Content: rendering and export collaborators.
//!
//! Takes normalized records the rest of the way to something a static site
//! generator can consume: markdown rendered to HTML, excerpts derived for
//! listings, pages addressed by `<collection>/<slug>`, and a JSON output
//! tree written with change detection.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown rendering and plain-text excerpting
//! - [`page`]: Page assembly and date ordering
//! - [`writer`]: JSON content export

pub mod markdown;
pub mod page;
pub mod writer;

pub use markdown::{EXCERPT_MAX_CHARS, plain_excerpt, render_html};
pub use page::{ContentPage, build_page, build_pages, sort_by_start_date};
pub use writer::{ContentWriter, IndexEntry, WriteReport};
