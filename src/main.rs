use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use u_binpack::ils::{IlsConfig, IlsRunner, Improvement};
use u_binpack::io::cli::{Cli, Format};
use u_binpack::io::{self as bp_io, read_instances, read_instances_json};
use u_binpack::models::Instance;

fn main() -> Result<()> {
    let args = Cli::parse();
    bp_io::init_logger(args.log_level).context("could not initialize logger")?;

    let config = match &args.config_file {
        None => IlsConfig::default(),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };
    let config = args.apply(config);
    config.validate().context("invalid solver configuration")?;
    info!("[MAIN] Using {config:?}");

    let instances = match &args.input {
        None => read_input(io::stdin().lock(), args.format),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file {}", path.display()))?;
            read_input(BufReader::new(file), args.format)
        }
    }
    .context("could not read instances")?;
    info!("[MAIN] Read {} instance(s)", instances.len());

    let verbose = args.verbose;
    let reports = IlsRunner::run_batch(&instances, &config, |id: &str, event: &Improvement| {
        if verbose {
            eprintln!(
                "[{id}] bins = {}, waste = {:.2}, elapsed = {:.3}s, iteration = {}",
                event.bin_count,
                event.waste,
                event.elapsed.as_secs_f64(),
                event.iteration
            );
        }
    })?;

    let stdout = BufWriter::new(io::stdout().lock());
    match args.output {
        Format::Text => bp_io::write_text_report(stdout, &reports, args.show_bins),
        Format::Json => bp_io::write_json_report(stdout, &reports),
    }
    .context("could not write results")?;

    Ok(())
}

fn read_input<R: Read>(reader: R, format: Format) -> Result<Vec<Instance>, u_binpack::Error> {
    match format {
        Format::Text => read_instances(reader),
        Format::Json => read_instances_json(reader),
    }
}
