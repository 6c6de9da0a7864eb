//! Output rendering.
//!
//! Each format implements [`Renderer`]; [`create_renderer`] dispatches on
//! the format name given on the command line.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::StyleGuide;
use anyhow::{anyhow, Result};

/// Renders a style guide into one output format.
pub trait Renderer {
    fn render(&self, guide: &StyleGuide) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}

/// Anchor slug for a section title: lowercase, alphanumerics and hyphens
/// kept, spaces turned into hyphens, everything else dropped.
pub(crate) fn anchor_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
