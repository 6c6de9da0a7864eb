//! Data model for the extracted style guide.
//!
//! These structures are format-agnostic: parsing fills them in and the
//! renderers read them. Downstream access to the aggregate is read-only.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// One documented entry of the style guide, built from a single comment
/// block that carried a reference tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Hierarchical identifier, e.g. `components.buttons`.
    pub reference: String,
    /// Lead text of the block, line breaks collapsed to single spaces.
    pub header: String,
    /// Long-form description. HTML when Markdown rendering is enabled,
    /// verbatim text otherwise.
    pub description: String,
    /// Documented modifier classes and pseudo-classes, in source order.
    pub modifiers: Vec<Modifier>,
    /// Documented parameters (mixin arguments, variables), in source order.
    pub parameters: Vec<Parameter>,
    /// Example markup, always verbatim.
    pub markup: String,
    /// Ordering hint among siblings. Zero when absent or non-numeric.
    pub weight: i32,
    /// The block carried a deprecation notice.
    pub deprecated: bool,
    /// The block was marked experimental.
    pub experimental: bool,
    /// Caller-declared custom properties. Every declared name is present;
    /// tags the block did not carry map to the empty string.
    pub custom: BTreeMap<String, String>,
    /// Where the section came from.
    pub source: SourceFile,
}

/// A modifier entry: variant class or pseudo-class with a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifier {
    pub name: String,
    pub description: String,
}

/// A parameter entry: name, optional default value, description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub default_value: String,
    pub description: String,
}

/// Origin of a section. All fields are empty (line 0 aside) for anonymous
/// input such as stdin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Base-relative, `/`-separated file name.
    pub name: String,
    /// Base directory the name is relative to.
    pub base: String,
    /// Path as given on the command line.
    pub path: String,
    /// 1-based line number of the block's opening line.
    pub line: usize,
}

/// The aggregated style guide across all parsed inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleGuide {
    files: Vec<String>,
    sections: Vec<Section>,
}

impl StyleGuide {
    /// Assemble the aggregate. Section order is parse order and is
    /// preserved from here on.
    pub fn new(files: Vec<String>, sections: Vec<Section>) -> Self {
        StyleGuide { files, sections }
    }

    /// Names of the parsed files, in input order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Every section, in parse order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by exact reference. Duplicate references are
    /// allowed; the earliest match wins.
    pub fn section(&self, reference: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.reference == reference)
    }

    /// Every section whose reference matches the pattern, in parse order.
    pub fn sections_matching(&self, pattern: &Regex) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| pattern.is_match(&s.reference))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(reference: &str) -> Section {
        Section {
            reference: reference.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn section_lookup_is_exact() {
        let guide = StyleGuide::new(
            vec![],
            vec![section("components"), section("components.buttons")],
        );
        assert_eq!(
            guide.section("components.buttons").map(|s| &s.reference[..]),
            Some("components.buttons")
        );
        assert!(guide.section("components.button").is_none());
    }

    #[test]
    fn duplicate_references_keep_first() {
        let mut first = section("forms");
        first.weight = 1;
        let mut second = section("forms");
        second.weight = 2;
        let guide = StyleGuide::new(vec![], vec![first, second]);
        assert_eq!(guide.section("forms").map(|s| s.weight), Some(1));
    }

    #[test]
    fn sections_matching_preserves_order() {
        let guide = StyleGuide::new(
            vec![],
            vec![
                section("components.buttons"),
                section("foundations.palette"),
                section("components.forms"),
            ],
        );
        let pattern = Regex::new(r"^components\.").unwrap();
        let matched: Vec<_> = guide
            .sections_matching(&pattern)
            .iter()
            .map(|s| s.reference.clone())
            .collect();
        assert_eq!(matched, vec!["components.buttons", "components.forms"]);
    }

    #[test]
    fn empty_guide() {
        let guide = StyleGuide::default();
        assert!(guide.files().is_empty());
        assert!(guide.sections().is_empty());
        assert!(guide.section("anything").is_none());
    }
}
