use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pdflayout_core::{ExtractConfig, FieldSelection, OutputFormat, RecordKinds};

/// Dump text, path and image layout records from PDF documents.
///
/// PATH is either a PDF file (records go to stdout) or a directory that is
/// searched recursively; each `name.pdf` found gets a `name.pdftxt` next
/// to it.
#[derive(Debug, Parser)]
#[command(name = "pdflayout", about, version)]
pub struct Cli {
    /// Path to a PDF file or a directory of PDF files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Emit text records
    #[arg(long)]
    pub text: bool,

    /// Emit path drawing records
    #[arg(long)]
    pub draw: bool,

    /// Emit image placement records
    #[arg(long)]
    pub image: bool,

    /// Append the font name to text records
    #[arg(long, alias = "fontName")]
    pub font_name: bool,

    /// Append the advance box to text records
    #[arg(long)]
    pub bounding: bool,

    /// Append the glyph outline box to text records
    #[arg(long)]
    pub glyph: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Tsv)]
    pub format: FormatArg,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Tab-separated records, blank line between groups
    Tsv,
    /// One JSON object per page
    Json,
}

impl Cli {
    /// Build the extraction settings from the flags.
    pub fn config(&self) -> ExtractConfig {
        let format = match self.format {
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Json => OutputFormat::Json,
        };
        ExtractConfig::default()
            .with_kinds(RecordKinds::selected(self.text, self.draw, self.image))
            .with_fields(FieldSelection {
                font_name: self.font_name,
                bounding: self.bounding,
                glyph: self.glyph,
            })
            .with_format(format)
    }
}
