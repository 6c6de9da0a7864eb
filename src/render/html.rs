//! HTML renderer.
//!
//! Builds a standalone page: embedded stylesheet, index, one `<h2>` per
//! section. Descriptions arrive as HTML when Markdown rendering is
//! enabled and are embedded as-is; everything else is escaped.

use crate::model::{Section, StyleGuide};
use crate::render::{anchor_slug, Renderer};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, guide: &StyleGuide) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>Style guide</title>\n");
        out.push_str("<style>\n");
        out.push_str(
            "body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n",
        );
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("pre code { background: none; padding: 0; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str(
            ".flag { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; color: white; }\n",
        );
        out.push_str(".flag-deprecated { background: #c0392b; }\n");
        out.push_str(".flag-experimental { background: #8e44ad; }\n");
        out.push_str(".source { color: #888; font-size: 0.85em; }\n");
        out.push_str("</style>\n</head>\n<body>\n");
        out.push_str("<h1>Style guide</h1>\n");

        if !guide.sections().is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for section in guide.sections() {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    anchor_slug(&section.reference),
                    html_escape(&section.reference)
                ));
            }
            out.push_str("</ul>\n");
        }

        for section in guide.sections() {
            render_section(&mut out, section);
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_section(out: &mut String, section: &Section) {
    out.push_str(&format!(
        "<h2 id=\"{}\">{}",
        anchor_slug(&section.reference),
        html_escape(&section.reference)
    ));
    if !section.header.is_empty() {
        out.push(' ');
        out.push_str(&html_escape(&section.header));
    }
    if section.deprecated {
        out.push_str(" <span class=\"flag flag-deprecated\">deprecated</span>");
    }
    if section.experimental {
        out.push_str(" <span class=\"flag flag-experimental\">experimental</span>");
    }
    out.push_str("</h2>\n");

    if !section.source.name.is_empty() {
        out.push_str(&format!(
            "<p class=\"source\">{}:{}</p>\n",
            html_escape(&section.source.name),
            section.source.line
        ));
    }

    if !section.description.is_empty() {
        out.push_str(&section.description);
        if !section.description.ends_with('\n') {
            out.push('\n');
        }
    }

    if !section.markup.is_empty() {
        out.push_str("<h4>Markup</h4>\n");
        out.push_str(&format!(
            "<pre><code class=\"language-html\">{}</code></pre>\n",
            html_escape(&section.markup)
        ));
    }

    if !section.modifiers.is_empty() {
        out.push_str("<h4>Modifiers</h4>\n<dl>\n");
        for modifier in &section.modifiers {
            out.push_str(&format!(
                "  <dt><code>{}</code></dt>\n",
                html_escape(&modifier.name)
            ));
            out.push_str(&format!("  <dd>{}</dd>\n", modifier.description));
        }
        out.push_str("</dl>\n");
    }

    if !section.parameters.is_empty() {
        out.push_str("<h4>Parameters</h4>\n<dl>\n");
        for parameter in &section.parameters {
            if parameter.default_value.is_empty() {
                out.push_str(&format!(
                    "  <dt><code>{}</code></dt>\n",
                    html_escape(&parameter.name)
                ));
            } else {
                out.push_str(&format!(
                    "  <dt><code>{}</code> = <code>{}</code></dt>\n",
                    html_escape(&parameter.name),
                    html_escape(&parameter.default_value)
                ));
            }
            out.push_str(&format!("  <dd>{}</dd>\n", parameter.description));
        }
        out.push_str("</dl>\n");
    }

    let custom: Vec<_> = section
        .custom
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    if !custom.is_empty() {
        out.push_str("<h4>Properties</h4>\n<dl>\n");
        for (name, value) in custom {
            out.push_str(&format!("  <dt>{}</dt>\n", html_escape(name)));
            out.push_str(&format!("  <dd>{}</dd>\n", html_escape(value)));
        }
        out.push_str("</dl>\n");
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, Options};

    fn render(guide: &StyleGuide) -> String {
        HtmlRenderer.render(guide)
    }

    #[test]
    fn page_skeleton() {
        let output = render(&StyleGuide::default());
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<h1>Style guide</h1>"));
        assert!(output.ends_with("</body>\n</html>\n"));
        assert!(!output.contains("<h2>Index</h2>"));
    }

    #[test]
    fn section_heading_and_anchor() {
        let guide = parse(
            "/*\nButtons\n\n@styleguide components.buttons\n*/",
            &Options::default(),
        );
        let output = render(&guide);
        assert!(output.contains("<li><a href=\"#componentsbuttons\">components.buttons</a></li>"));
        assert!(output.contains("<h2 id=\"componentsbuttons\">components.buttons Buttons</h2>"));
    }

    #[test]
    fn markup_escaped() {
        let guide = parse(
            "/*\n@styleguide x\n@markup\n<div class=\"a\">&</div>\n*/",
            &Options::default(),
        );
        let output = render(&guide);
        assert!(output.contains("&lt;div class=&quot;a&quot;&gt;&amp;&lt;/div&gt;"));
        assert!(!output.contains("<div class=\"a\">"));
    }

    #[test]
    fn description_embedded_as_html() {
        let guide = parse(
            "/*\n@styleguide x\n@description uses the `.btn` class\n*/",
            &Options::default(),
        );
        let output = render(&guide);
        assert!(output.contains("<p>uses the <code>.btn</code> class</p>"));
    }

    #[test]
    fn flags_rendered() {
        let guide = parse("/*\n@styleguide x\n@deprecated\n*/", &Options::default());
        let output = render(&guide);
        assert!(output.contains("<span class=\"flag flag-deprecated\">deprecated</span>"));
    }

    #[test]
    fn parameter_with_default() {
        let guide = parse(
            "/*\n@styleguide x\n@param @color = #fff - Fill\n*/",
            &Options::default(),
        );
        let output = render(&guide);
        assert!(output.contains("<dt><code>@color</code> = <code>#fff</code></dt>"));
        assert!(output.contains("<dd>Fill</dd>"));
    }
}
