//! Slug derivation from free-text titles.
//!
//! A slug is the URL-path-safe identifier a page is addressed by. Derivation
//! is deterministic and ASCII-only: anything outside `[a-z0-9-]` after
//! lowercasing and whitespace folding is dropped. Titles that leave nothing
//! behind (punctuation-only, emoji-only, fully non-ASCII) produce no slug and
//! the record carrying them is skipped upstream.

// ============================================================================
// Derivation
// ============================================================================

/// Derive a URL-safe slug from a title.
///
/// Applied in order: ASCII-lowercase the input, fold every whitespace run
/// into a single hyphen, drop every character outside `[a-z0-9-]`, collapse
/// hyphen runs, and trim hyphens from both ends. Returns `None` when the
/// input is absent, blank, or nothing survives the filtering.
///
/// The result always matches `^[a-z0-9]+(-[a-z0-9]+)*$` and is a fixed point
/// of this function.
///
/// # Examples
///
/// ```
/// use gridsite_core::slug::derive_slug;
///
/// assert_eq!(
///     derive_slug(Some("Hurricane Katrina 2005")).as_deref(),
///     Some("hurricane-katrina-2005")
/// );
/// assert_eq!(derive_slug(Some("!!!???")), None);
/// assert_eq!(derive_slug(None), None);
/// ```
pub fn derive_slug(title: Option<&str>) -> Option<String> {
    let trimmed = title?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut slug = String::with_capacity(trimmed.len());
    // A pending hyphen is only flushed when another slug character arrives,
    // which collapses runs and trims both ends in a single pass.
    let mut pending_hyphen = false;

    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        match ch.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9') => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c);
            }
            '-' => pending_hyphen = true,
            _ => {}
        }
    }

    if slug.is_empty() { None } else { Some(slug) }
}

/// Check whether a string already satisfies the slug grammar.
///
/// # Examples
///
/// ```
/// use gridsite_core::slug::is_valid_slug;
///
/// assert!(is_valid_slug("hurricane-katrina-2005"));
/// assert!(!is_valid_slug("Trailing-"));
/// assert!(!is_valid_slug(""));
/// ```
pub fn is_valid_slug(s: &str) -> bool {
    if s.is_empty() || s.starts_with('-') || s.ends_with('-') || s.contains("--") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ============================================================================
// Tests
// ============================================================================
