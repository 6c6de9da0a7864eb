//! Parsing pipeline: raw text to the aggregated style guide.
//!
//! [`blocks`] isolates comment blocks, [`tags`] splits them into lead
//! text and tag values, and [`section`] builds typed sections out of the
//! tagged blocks. The functions here wire the three together for
//! anonymous text and for named files.

pub mod blocks;
pub mod section;
pub mod tags;

use crate::model::{Section, SourceFile, StyleGuide};
use std::path::{Path, PathBuf};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Render descriptions through Markdown: block mode for sections,
    /// inline mode for modifiers and parameters.
    pub markdown: bool,
    /// Record lead text as the section header.
    pub header: bool,
    /// Extra tag names copied onto sections as custom properties.
    pub custom: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            markdown: true,
            header: true,
            custom: Vec::new(),
        }
    }
}

/// One named input: origin paths plus contents.
#[derive(Debug, Clone)]
pub struct SourceText {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Base directory its recorded name is made relative to.
    pub base: PathBuf,
    /// File contents.
    pub contents: String,
}

/// Parse a single anonymous text.
pub fn parse(text: &str, options: &Options) -> StyleGuide {
    StyleGuide::new(Vec::new(), parse_blob(text, options, &SourceFile::default()))
}

/// Parse several anonymous texts, aggregating sections in input order.
pub fn parse_texts<'a, I>(texts: I, options: &Options) -> StyleGuide
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sections = Vec::new();
    for text in texts {
        sections.extend(parse_blob(text, options, &SourceFile::default()));
    }
    StyleGuide::new(Vec::new(), sections)
}

/// Parse named files, aggregating sections in input order and recording
/// each file under its base-relative, `/`-separated name.
pub fn parse_files(files: &[SourceText], options: &Options) -> StyleGuide {
    let mut names = Vec::with_capacity(files.len());
    let mut sections = Vec::new();
    for file in files {
        let name = relative_name(&file.path, &file.base);
        let origin = SourceFile {
            name: name.clone(),
            base: file.base.to_string_lossy().into_owned(),
            path: file.path.to_string_lossy().into_owned(),
            line: 0,
        };
        sections.extend(parse_blob(&file.contents, options, &origin));
        names.push(name);
    }
    StyleGuide::new(names, sections)
}

/// Extract, tag-split and build sections for one text.
fn parse_blob(text: &str, options: &Options, origin: &SourceFile) -> Vec<Section> {
    let mut sections = Vec::new();
    for block in blocks::extract(text) {
        let tag_map = tags::TagMap::parse(&block.text);
        let source = SourceFile {
            line: block.line,
            ..origin.clone()
        };
        if let Some(built) = section::build(&tag_map, options, source) {
            sections.push(built);
        }
    }
    sections
}

/// Base-relative path with forward slashes, as recorded in the guide.
fn relative_name(path: &Path, base: &Path) -> String {
    let relative = pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTONS: &str = "/*\nButtons\n\n@styleguide components.buttons\n@weight 2\n*/\n.btn {}\n";
    const FORMS: &str = "// Forms\n//\n// @styleguide components.forms\n.input {}\n";

    #[test]
    fn parse_single_text() {
        let guide = parse(BUTTONS, &Options::default());
        assert!(guide.files().is_empty());
        assert_eq!(guide.sections().len(), 1);
        let section = guide.section("components.buttons").unwrap();
        assert_eq!(section.header, "Buttons");
        assert_eq!(section.weight, 2);
        assert_eq!(section.source.name, "");
        assert_eq!(section.source.line, 1);
    }

    #[test]
    fn untagged_input_yields_no_sections() {
        let guide = parse(".btn { color: red; }\n/* plain note */\n", &Options::default());
        assert!(guide.sections().is_empty());
    }

    #[test]
    fn texts_aggregate_in_input_order() {
        let guide = parse_texts([BUTTONS, FORMS], &Options::default());
        let refs: Vec<_> = guide.sections().iter().map(|s| &s.reference).collect();
        assert_eq!(refs, vec!["components.buttons", "components.forms"]);
    }

    #[test]
    fn parse_is_deterministic() {
        let first = parse_texts([BUTTONS, FORMS], &Options::default());
        let second = parse_texts([BUTTONS, FORMS], &Options::default());
        assert_eq!(first, second);
    }

    #[test]
    fn files_record_relative_names() {
        let files = vec![SourceText {
            path: PathBuf::from("css/base/buttons.scss"),
            base: PathBuf::from("css"),
            contents: BUTTONS.to_string(),
        }];
        let guide = parse_files(&files, &Options::default());
        assert_eq!(guide.files(), ["base/buttons.scss"]);
        let section = guide.section("components.buttons").unwrap();
        assert_eq!(section.source.name, "base/buttons.scss");
        assert_eq!(section.source.base, "css");
        assert_eq!(section.source.path, "css/base/buttons.scss");
        assert_eq!(section.source.line, 1);
    }

    #[test]
    fn file_without_sections_still_listed() {
        let files = vec![SourceText {
            path: PathBuf::from("plain.css"),
            base: PathBuf::from("."),
            contents: ".a {}\n".to_string(),
        }];
        let guide = parse_files(&files, &Options::default());
        assert_eq!(guide.files().len(), 1);
        assert!(guide.sections().is_empty());
    }

    #[test]
    fn section_line_numbers_per_file() {
        let contents = ".a {}\n\n/*\n@styleguide late.section\n*/\n";
        let files = vec![SourceText {
            path: PathBuf::from("late.css"),
            base: PathBuf::from("."),
            contents: contents.to_string(),
        }];
        let guide = parse_files(&files, &Options::default());
        assert_eq!(guide.section("late.section").unwrap().source.line, 3);
    }
}
