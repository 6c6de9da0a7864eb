//! JSON renderer.
//!
//! Serializes the whole style guide for tooling integration. The model
//! derives `Serialize`, so this renderer is just the pretty printer.

use crate::model::StyleGuide;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, guide: &StyleGuide) -> String {
        // String keys and plain values only, so serialization cannot fail.
        let mut out = serde_json::to_string_pretty(guide).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, Options};

    #[test]
    fn json_round_trips_through_serde() {
        let guide = parse(
            "/*\nButtons\n\n@styleguide components.buttons\n@weight 2\n@deprecated\n*/",
            &Options::default(),
        );
        let output = JsonRenderer.render(&guide);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let section = &value["sections"][0];
        assert_eq!(section["reference"], "components.buttons");
        assert_eq!(section["header"], "Buttons");
        assert_eq!(section["weight"], 2);
        assert_eq!(section["deprecated"], true);
        assert_eq!(section["source"]["line"], 1);
    }

    #[test]
    fn empty_guide_serializes() {
        let output = JsonRenderer.render(&StyleGuide::default());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["files"].as_array().unwrap().is_empty());
        assert!(value["sections"].as_array().unwrap().is_empty());
    }

    #[test]
    fn custom_properties_serialized() {
        let options = Options {
            custom: vec!["tokens".to_string()],
            ..Options::default()
        };
        let guide = parse("/*\n@styleguide x\n@tokens dark-set\n*/", &options);
        let output = JsonRenderer.render(&guide);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sections"][0]["custom"]["tokens"], "dark-set");
    }
}
