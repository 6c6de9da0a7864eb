//! Tag splitting.
//!
//! Splits a comment block's de-indented text into lead text (everything
//! before the first tag line) and an ordered mapping from tag name to
//! value list. A tag line starts with `@` at column zero of the
//! de-indented text; everything else extends the value before it.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A tag line: `@name` at the start of the line, rest is the value.
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z][A-Za-z0-9_-]*)[ \t]*(.*)$").unwrap());

/// Lead text plus every tag of one comment block.
///
/// Tags map to ordered value lists, so repetition is preserved. Callers
/// take the first value or all of them explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    lead: String,
    tags: HashMap<String, Vec<String>>,
}

impl TagMap {
    /// Split a block's text into lead text and tags.
    pub fn parse(text: &str) -> TagMap {
        let mut lead_lines: Vec<&str> = Vec::new();
        let mut tags: HashMap<String, Vec<String>> = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in text.lines() {
            if let Some(caps) = RE_TAG.captures(line) {
                if let Some((name, value)) = current.take() {
                    push_tag(&mut tags, name, value);
                }
                current = Some((caps[1].to_string(), caps[2].to_string()));
            } else if let Some((_, value)) = current.as_mut() {
                value.push('\n');
                value.push_str(line);
            } else {
                lead_lines.push(line);
            }
        }
        if let Some((name, value)) = current {
            push_tag(&mut tags, name, value);
        }

        TagMap {
            lead: lead_lines.join("\n").trim().to_string(),
            tags,
        }
    }

    /// Text before the first tag, outer whitespace trimmed.
    pub fn lead(&self) -> &str {
        &self.lead
    }

    /// First value of `name`, if the tag occurred.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.tags
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value of `name`, in occurrence order.
    pub fn all(&self, name: &str) -> &[String] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` occurred at all, with or without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }
}

fn push_tag(tags: &mut HashMap<String, Vec<String>>, name: String, value: String) {
    tags.entry(name).or_default().push(value.trim().to_string());
}
