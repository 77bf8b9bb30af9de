//! Markdown rendering and plain-text excerpting.
//!
//! Rendering delegates to `pulldown-cmark`; there is no custom renderer
//! here, only the option set we parse with and an event walk that reduces a
//! body to excerpt text.

use pulldown_cmark::{Event, Options, Parser, TagEnd, html};

/// Default excerpt budget used by page assembly.
pub const EXCERPT_MAX_CHARS: usize = 280;

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Render a markdown body to HTML.
///
/// # Examples
///
/// ```
/// let html = gridsite_content::markdown::render_html("Some **bold** text");
/// assert_eq!(html, "<p>Some <strong>bold</strong> text</p>\n");
/// ```
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Reduce a markdown body to a plain-text excerpt.
///
/// Keeps text and inline-code content, drops all markup and raw HTML,
/// separates blocks with single spaces, and truncates at a word boundary
/// within `max_chars`, appending `…` when anything was cut.
pub fn plain_excerpt(markdown: &str, max_chars: usize) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_at_word(&collapsed, max_chars)
}

fn truncate_at_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    // Cut at the last word boundary inside the budget; a single oversized
    // word is cut hard.
    let cut = match head.rfind(' ') {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head.as_str(),
    };
    format!("{}…", cut.trim_end())
}
