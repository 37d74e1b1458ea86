use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use rolodex_core::config::{InputFormat, MalformedPolicy, Settings};

/// Input formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Vcard,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Vcard => Self::Vcard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "rolodex")]
#[command(about = "Export an address book as Mozilla LDIF")]
pub struct Cli {
    /// Configuration file (default: rolodex.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input format (default: guessed from the file extension, then config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write LDIF to FILE instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write multi-line values escaped instead of base64
    #[arg(long)]
    pub no_base64: bool,

    /// Leave malformed records out instead of stopping
    #[arg(long)]
    pub skip_malformed: bool,

    /// Contact file to export
    pub input: PathBuf,
}

impl Cli {
    /// Overrides settings with the flags given on the command line.
    pub fn apply(&self, settings: &mut Settings) {
        if self.no_base64 {
            settings.export.base64 = false;
        }
        if self.skip_malformed {
            settings.export.on_malformed = MalformedPolicy::Skip;
        }
        settings.input.format = self.input_format(settings.input.format);
    }

    /// `--format`, else the input's extension, else `configured`.
    #[must_use]
    pub fn input_format(&self, configured: InputFormat) -> InputFormat {
        self.format
            .map(InputFormat::from)
            .or_else(|| InputFormat::from_path(&self.input))
            .unwrap_or(configured)
    }

    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }
}
