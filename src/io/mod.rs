//! Instance input, result output and command-line glue.
//!
//! - [`read_instances`] — Whitespace-separated batch format
//! - [`read_instances_json`] — JSON array of instances
//! - [`write_text_report`], [`write_json_report`] — Per-instance results
//! - [`cli::Cli`] — Command-line arguments of the `u-binpack` binary

pub mod cli;
mod reader;
mod report;

use log::LevelFilter;

pub use reader::{parse_instances, read_instances, read_instances_json};
pub use report::{write_json_report, write_text_report, JsonReport};

/// Installs `env_logger` on stderr with the given level.
///
/// `RUST_LOG` still refines the filter per module.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
}
