//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::ils::IlsConfig;

/// Input and output document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Whitespace-separated instances / plain text results
    #[default]
    Text,
    /// JSON
    Json,
}

/// Solve a batch of one-dimensional bin packing instances with Iterated Local Search.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Time budget per instance, in seconds (required without --config-file)
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        allow_hyphen_values = true,
        required_unless_present = "config_file"
    )]
    pub time: Option<f64>,
    /// Print the items of every bin
    #[arg(short, long)]
    pub show_bins: bool,
    /// Seed for the random generator
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
    /// Instance file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Instance format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Result format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub output: Format,
    /// JSON file with an `IlsConfig`
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
    /// Print every improvement to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overrides the budget and seed of `config` with the ones given on the command line.
    pub fn apply(&self, mut config: IlsConfig) -> IlsConfig {
        if let Some(time) = self.time {
            config.time_budget = time;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}
