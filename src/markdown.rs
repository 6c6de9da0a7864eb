//! Markdown rendering for descriptions.
//!
//! Two modes: [`block`] wraps the result in paragraph tags as usual,
//! [`inline`] unwraps a single outer paragraph so the result can sit
//! inside another element (definition lists, table cells).

use pulldown_cmark::{html, Options, Parser};

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Render Markdown to HTML in block mode.
pub fn block(text: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(text, options()));
    out
}

/// Render Markdown to HTML in inline mode.
///
/// Like [`block`], but when the result is exactly one paragraph the
/// `<p>` wrapper is stripped. Multi-paragraph results are left alone.
pub fn inline(text: &str) -> String {
    let rendered = block(text);
    let trimmed = rendered.trim_end();
    if let Some(inner) = trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        if !inner.contains("<p>") {
            return inner.to_string();
        }
    }
    rendered
}
