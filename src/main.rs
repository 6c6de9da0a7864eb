//! styledoc command line interface.
//!
//! Two modes:
//!
//! - stdin mode: `styledoc < buttons.scss` parses standard input and
//!   writes the rendered guide to stdout.
//! - file mode: `styledoc -f html -o guide.html scss/ 'lib/**/*.css'`
//!   expands the arguments into stylesheet files, parses them all into
//!   one guide, and writes a single output.
//!
//! Unreadable inputs are skipped with a warning on stderr; the remaining
//! files still produce a guide.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use styledoc::parser::{self, Options, SourceText};
use styledoc::render;

/// File extensions recognized when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less", "styl"];

#[derive(Parser)]
#[command(
    name = "styledoc",
    version,
    about = "Generate a style guide from documentation comments in stylesheet sources"
)]
struct Cli {
    /// Input files, directories or glob patterns. Reads stdin when empty.
    files: Vec<String>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Base directory for the recorded source names.
    #[arg(short = 'b', long)]
    base: Option<PathBuf>,

    /// Keep descriptions verbatim instead of rendering them as Markdown.
    #[arg(long)]
    no_markdown: bool,

    /// Discard lead text instead of recording it as the section header.
    #[arg(long)]
    no_header: bool,

    /// Extra tag copied onto sections as a custom property. Repeatable.
    #[arg(long, value_name = "TAG")]
    custom: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = Options {
        markdown: !cli.no_markdown,
        header: !cli.no_header,
        custom: cli.custom.clone(),
    };

    let guide = if cli.files.is_empty() {
        stdin_mode(&options)?
    } else {
        file_mode(&cli.files, cli.base.as_deref(), &options)?
    };

    let renderer = render::create_renderer(&cli.format)?;
    let rendered = renderer.render(&guide);

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }
    Ok(())
}

fn stdin_mode(options: &Options) -> Result<styledoc::StyleGuide> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(parser::parse(&input, options))
}

fn file_mode(
    patterns: &[String],
    base: Option<&Path>,
    options: &Options,
) -> Result<styledoc::StyleGuide> {
    let mut sources = Vec::new();
    for (file_base, path) in expand_inputs(patterns, base)? {
        match fs::read_to_string(&path) {
            Ok(contents) => sources.push(SourceText {
                path,
                base: file_base,
                contents,
            }),
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }
    Ok(parser::parse_files(&sources, options))
}

/// Expand arguments into (base, file) pairs.
///
/// Literal files pass through with `.` as base. Directories are scanned
/// (non-recursive) for supported extensions, with the directory itself as
/// base. Anything else is treated as a glob pattern. The result is
/// sorted and de-duplicated by path; `--base` overrides every base.
fn expand_inputs(
    patterns: &[String],
    base_override: Option<&Path>,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut files: Vec<(PathBuf, PathBuf)> = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push((resolve_base(base_override, Path::new(".")), path.to_path_buf()));
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let candidate = entry.path();
                if candidate.is_file() && has_supported_extension(&candidate) {
                    files.push((resolve_base(base_override, path), candidate));
                }
            }
            continue;
        }
        // Try as glob
        let matched: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        if matched.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        for p in matched {
            files.push((resolve_base(base_override, Path::new(".")), p));
        }
    }

    // Sort for deterministic output
    files.sort_by(|a, b| a.1.cmp(&b.1));
    files.dedup_by(|a, b| a.1 == b.1);
    Ok(files)
}

fn resolve_base(base_override: Option<&Path>, fallback: &Path) -> PathBuf {
    base_override.unwrap_or(fallback).to_path_buf()
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
