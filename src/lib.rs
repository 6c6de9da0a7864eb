//! styledoc extracts style-guide sections from stylesheet comments.
//!
//! Stylesheet sources (CSS, SCSS, Sass, Less, Stylus) are scanned for
//! comment blocks; blocks carrying a `@styleguide` reference tag become
//! typed sections, aggregated into a queryable [`StyleGuide`].
//!
//! ```
//! use styledoc::{parse, Options};
//!
//! let guide = parse(
//!     "/*\nButtons\n\n@styleguide components.buttons\n*/",
//!     &Options::default(),
//! );
//! assert!(guide.section("components.buttons").is_some());
//! ```

pub mod markdown;
pub mod model;
pub mod parser;
pub mod render;

pub use model::{Modifier, Parameter, Section, SourceFile, StyleGuide};
pub use parser::{parse, parse_files, parse_texts, Options, SourceText};
