//! Command-line argument definitions for the Mapscribe CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the captured page to read, which
//! artifacts to export and where, configuration file selection, and logging
//! verbosity.

use clap::{Parser, ValueEnum};

use mapscribe::host::ExportKind;

/// Artifacts to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Markdown outline
    Markdown,
    /// Annotated SVG
    Svg,
    /// Markdown outline, then annotated SVG
    Both,
}

impl Format {
    /// Export kinds in the order they run.
    pub fn kinds(self) -> &'static [ExportKind] {
        match self {
            Format::Markdown => &[ExportKind::Markdown],
            Format::Svg => &[ExportKind::Svg],
            Format::Both => &[ExportKind::Markdown, ExportKind::Svg],
        }
    }
}

/// Command-line arguments for the Mapscribe export tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the captured page (HTML with the rendered mind map)
    #[arg(help = "Path to the captured page")]
    pub input: String,

    /// Artifacts to export
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    pub format: Format,

    /// Directory receiving the exported files
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print each export result as a JSON line instead of writing files
    #[arg(long)]
    pub json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
