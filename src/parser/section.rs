//! Section building.
//!
//! Turns one comment block's tags into a typed [`Section`], or discards
//! the block when the reference tag is missing or empty. Modifier and
//! parameter values go through a small `NAME [= DEFAULT] - DESCRIPTION`
//! grammar; descriptions spanning several lines are folded to one.

use crate::markdown;
use crate::model::{Modifier, Parameter, Section, SourceFile};
use crate::parser::tags::TagMap;
use crate::parser::Options;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// The reference tag. Blocks without it do not become sections.
const REFERENCE_TAG: &str = "styleguide";

/// Name/description separator: `-` with horizontal whitespace on both
/// sides. Hyphens inside names (`.btn--primary`) do not match.
static RE_DESC_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+-[ \t]+").unwrap());

/// Name/default separator: `=` with horizontal whitespace on both sides.
static RE_DEFAULT_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+=[ \t]+").unwrap());

/// Runs of horizontal whitespace, collapsed after folding a multi-line
/// description.
static RE_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Build a [`Section`] from one block's tags.
///
/// Returns `None` when the reference tag is absent or empty after
/// trimming. Unknown tags are ignored unless declared in
/// [`Options::custom`].
pub fn build(tags: &TagMap, options: &Options, source: SourceFile) -> Option<Section> {
    let reference = tags.first(REFERENCE_TAG).map(str::trim).unwrap_or("");
    if reference.is_empty() {
        return None;
    }

    let header = if options.header {
        tags.lead().replace('\n', " ")
    } else {
        String::new()
    };

    let description = match tags.first("description") {
        Some(text) if options.markdown => markdown::block(text),
        Some(text) => text.to_string(),
        None => String::new(),
    };

    let modifiers = tags
        .all("modifier")
        .iter()
        .map(|value| parse_modifier(value, options))
        .collect();
    let parameters = tags
        .all("param")
        .iter()
        .map(|value| parse_parameter(value, options))
        .collect();

    let mut custom = BTreeMap::new();
    for name in &options.custom {
        custom.insert(name.clone(), tags.first(name).unwrap_or("").to_string());
    }

    Some(Section {
        reference: reference.to_string(),
        header,
        description,
        modifiers,
        parameters,
        markup: tags.first("markup").unwrap_or("").to_string(),
        weight: tags
            .first("weight")
            .map(|value| value.trim().parse().unwrap_or(0))
            .unwrap_or(0),
        deprecated: tags.contains("deprecated"),
        experimental: tags.contains("experimental"),
        custom,
        source,
    })
}

/// Parse a modifier value: `NAME - DESCRIPTION`.
fn parse_modifier(value: &str, options: &Options) -> Modifier {
    let (name, description) = split_description(value);
    Modifier {
        name: name.trim().to_string(),
        description: finish_description(description, options),
    }
}

/// Parse a parameter value: `NAME [= DEFAULT] - DESCRIPTION`.
fn parse_parameter(value: &str, options: &Options) -> Parameter {
    let (head, description) = split_description(value);
    let (name, default_value) = match RE_DEFAULT_SEP.find(head) {
        Some(sep) => (&head[..sep.start()], &head[sep.end()..]),
        None => (head, ""),
    };
    Parameter {
        name: name.trim().to_string(),
        default_value: default_value.trim().to_string(),
        description: finish_description(description, options),
    }
}

/// Split at the first ` - `. No separator means no description.
fn split_description(value: &str) -> (&str, &str) {
    match RE_DESC_SEP.find(value) {
        Some(sep) => (&value[..sep.start()], &value[sep.end()..]),
        None => (value, ""),
    }
}

/// Fold a description to a single line and optionally render it.
///
/// Only descriptions that arrive with line breaks get their space runs
/// collapsed; single-line spacing is kept verbatim.
fn finish_description(raw: &str, options: &Options) -> String {
    let folded = if raw.contains('\n') {
        RE_SPACE_RUN
            .replace_all(&raw.replace('\n', " "), " ")
            .into_owned()
    } else {
        raw.to_string()
    };
    if options.markdown && !folded.is_empty() {
        markdown::inline(&folded)
    } else {
        folded
    }
}
