//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// csvschema: parse CSV files into typed records
#[derive(Parser)]
#[command(name = "csvschema")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a data file and print typed records as JSON
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Skip rows that fail to coerce instead of aborting
        #[arg(long)]
        lenient: bool,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Write records to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that every row of a data file coerces against the schema
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered type names
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Input file, config and reader overrides shared by parse and check.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to the JSON config holding the schema and reader options
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Field delimiter (overrides the config)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Input encoding label, e.g. windows-1252 (overrides the config)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Skip the first row; `--skip-title=false` keeps it (overrides the config)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_title: Option<bool>,

    /// Treat empty int/float fields as errors instead of zero
    #[arg(long)]
    pub strict_numbers: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// A single JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}. Use json or jsonl.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}
