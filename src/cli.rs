//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::ignore_list::DEFAULT_IGNORE_FILE;
use crate::stamp::StampOptions;

/// Stamp YAML content files with per-folder ids and filename slugs
#[derive(Parser, Debug)]
#[command(name = "idstamp")]
#[command(
    about = "Adds a unique numeric `id` and a filename-derived `slug` to YAML files that lack them"
)]
#[command(version)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Ignore file, relative to ROOT unless absolute
    #[arg(long, value_name = "PATH", default_value = DEFAULT_IGNORE_FILE)]
    pub ignore_file: PathBuf,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit non-zero when any file needs a change
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per added field, then a summary
    #[default]
    Text,
    /// The full run report as JSON
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn options(&self) -> StampOptions {
        StampOptions {
            root: self.root.clone(),
            ignore_file: self.ignore_file.clone(),
            dry_run: self.dry_run || self.check,
        }
    }
}
