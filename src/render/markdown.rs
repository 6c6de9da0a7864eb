//! Markdown renderer.
//!
//! Emits an index followed by one `##` heading per section. Headings and
//! index entries share the same title text so the anchors line up.

use crate::model::{Section, StyleGuide};
use crate::render::{anchor_slug, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, guide: &StyleGuide) -> String {
        let mut output = String::new();
        let sections = guide.sections();

        if !sections.is_empty() {
            output.push_str("## Index\n\n");
            for section in sections {
                let title = section_title(section);
                output.push_str(&format!("* [{}](#{})\n", title, anchor_slug(&title)));
            }
            output.push('\n');
        }

        for section in sections {
            output.push_str(&render_section(section));
            output.push('\n');
        }
        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Heading text: reference, followed by the header when there is one.
fn section_title(section: &Section) -> String {
    if section.header.is_empty() {
        section.reference.clone()
    } else {
        format!("{} {}", section.reference, section.header)
    }
}

fn render_section(section: &Section) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", section_title(section)));

    let badges = render_badges(section);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }

    if !section.source.name.is_empty() {
        lines.push(format!(
            "*Source: `{}:{}`*\n",
            section.source.name, section.source.line
        ));
    }

    if !section.description.is_empty() {
        lines.push(section.description.trim_end().to_string());
        lines.push(String::new());
    }

    if !section.markup.is_empty() {
        lines.push("#### Markup\n".to_string());
        lines.push("```html".to_string());
        lines.push(section.markup.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    if !section.modifiers.is_empty() {
        lines.push("#### Modifiers\n".to_string());
        for modifier in &section.modifiers {
            lines.push(format!("* **{}**: {}", modifier.name, modifier.description));
        }
        lines.push(String::new());
    }

    if !section.parameters.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for parameter in &section.parameters {
            if parameter.default_value.is_empty() {
                lines.push(format!(
                    "* **{}**: {}",
                    parameter.name, parameter.description
                ));
            } else {
                lines.push(format!(
                    "* **{}** (default: `{}`): {}",
                    parameter.name, parameter.default_value, parameter.description
                ));
            }
        }
        lines.push(String::new());
    }

    let custom: Vec<_> = section
        .custom
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    if !custom.is_empty() {
        lines.push("#### Properties\n".to_string());
        for (name, value) in custom {
            lines.push(format!("* **{}**: {}", name, value));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Status badges, rendered as a quote line above the description.
fn render_badges(section: &Section) -> String {
    let mut badges: Vec<&str> = Vec::new();
    if section.deprecated {
        badges.push("*`deprecated`*");
    }
    if section.experimental {
        badges.push("*`experimental`*");
    }
    if badges.is_empty() {
        String::new()
    } else {
        format!("> {}", badges.join(" "))
    }
}
