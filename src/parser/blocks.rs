//! Comment block extraction.
//!
//! A line-oriented state machine scans stylesheet text and isolates every
//! single-line (`//`) comment run and multi-line (`/* ... */`) comment
//! block, in occurrence order. Interiors are de-indented against the first
//! content line; the original lines are kept verbatim alongside.
//!
//! Extraction never fails. Line endings are normalized up front, and a
//! block still open at end of input is finalized with what it has.
//!
//! Detection is purely line-based: a delimiter alone on its line opens or
//! closes a block even inside a string literal.

use regex::Regex;
use std::sync::LazyLock;

// -- Line patterns -----------------------------------------------------------

/// A line opening (or continuing) a single-line comment. The marker may
/// repeat, so `///` doc comments match too.
static RE_SINGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*//").unwrap());

/// Marker prefix stripped from single-line interiors.
static RE_SINGLE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*//+").unwrap());

/// A line consisting solely of a multi-line open delimiter. Opening
/// delimiters with trailing content on the same line do not start a block.
static RE_MULTI_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*+$").unwrap());

/// Open delimiter with the doc marker (`/**`).
static RE_DOC_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*\*+$").unwrap());

/// A line consisting solely of a multi-line close delimiter.
static RE_MULTI_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*+/$").unwrap());

// -- Block model -------------------------------------------------------------

/// A comment block isolated from the surrounding source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// 1-based line number of the opening line.
    pub line: usize,
    /// De-indented interior text, outer blank lines trimmed.
    pub text: String,
    /// The original lines of the block, delimiters included.
    pub raw: String,
    /// The block was opened with the `/**` doc marker.
    pub docblock: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Single,
    Multi {
        doc: bool,
    },
}

#[derive(Default)]
struct Scanner {
    blocks: Vec<CommentBlock>,
    state: State,
    start_line: usize,
    raw_lines: Vec<String>,
    text_lines: Vec<String>,
    indent: Option<String>,
}

/// Extract every comment block from `input`, in occurrence order.
pub fn extract(input: &str) -> Vec<CommentBlock> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut scanner = Scanner::default();

    // The synthetic trailing line closes a single-line run still open at
    // end of input through the normal path.
    let lines = normalized.split('\n').chain(std::iter::once(""));
    for (number, line) in lines.enumerate() {
        scanner.feed(number + 1, line.trim_end());
    }
    // An unterminated multi-line block never sees its close delimiter.
    if scanner.state != State::Idle {
        scanner.finalize();
    }
    scanner.blocks
}

impl Scanner {
    fn feed(&mut self, number: usize, line: &str) {
        match self.state {
            State::Single => {
                if RE_SINGLE.is_match(line) {
                    self.raw_lines.push(line.to_string());
                    let content = RE_SINGLE_MARKER.replace(line, "");
                    self.push_text(&content);
                    return;
                }
                // Close the run, then fall through: the closing line is
                // not consumed and may itself open the next block.
                self.finalize();
                self.open(number, line);
            }
            State::Multi { .. } => {
                self.raw_lines.push(line.to_string());
                if RE_MULTI_CLOSE.is_match(line) {
                    self.finalize();
                } else {
                    self.push_text(line);
                }
            }
            State::Idle => self.open(number, line),
        }
    }

    /// Start a block if `line` opens one; otherwise ignore it.
    fn open(&mut self, number: usize, line: &str) {
        if RE_MULTI_OPEN.is_match(line) {
            self.state = State::Multi {
                doc: RE_DOC_OPEN.is_match(line),
            };
            self.start_line = number;
            self.raw_lines.push(line.to_string());
        } else if RE_SINGLE.is_match(line) {
            self.state = State::Single;
            self.start_line = number;
            self.raw_lines.push(line.to_string());
            let content = RE_SINGLE_MARKER.replace(line, "");
            self.push_text(&content);
        }
    }

    /// Add one interior line, capturing the indent prefix from the first
    /// non-blank line and stripping it from every later line that carries
    /// it. Lines indented differently are kept whole.
    fn push_text(&mut self, line: &str) {
        match &self.indent {
            None => {
                if line.is_empty() {
                    // Blank lines before the indent is known are dropped;
                    // the capture stays pending.
                    return;
                }
                let start = line.len() - line.trim_start().len();
                self.indent = Some(line[..start].to_string());
                self.text_lines.push(line[start..].to_string());
            }
            Some(indent) => {
                let stripped = line.strip_prefix(indent.as_str()).unwrap_or(line);
                self.text_lines.push(stripped.to_string());
            }
        }
    }

    /// Emit the accumulated block and return to idle.
    fn finalize(&mut self) {
        let lines = std::mem::take(&mut self.text_lines);
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(start, |p| p + 1);
        self.blocks.push(CommentBlock {
            line: self.start_line,
            text: lines[start..end].join("\n"),
            raw: std::mem::take(&mut self.raw_lines).join("\n"),
            docblock: matches!(self.state, State::Multi { doc: true }),
        });
        self.state = State::Idle;
        self.indent = None;
    }
}
