//! Result reporters.

use std::io::{self, Write};

use serde::Serialize;

use crate::ils::InstanceReport;
use crate::models::Packing;

/// Writes one `Instance <id>: bins = <count>` line per instance.
///
/// With `show_bins`, each bin follows on its own line, numbered from 1,
/// with item sizes printed to two decimals.
///
/// # Examples
///
/// ```
/// use u_binpack::ils::{IlsConfig, IlsRunner};
/// use u_binpack::io::write_text_report;
/// use u_binpack::models::Instance;
///
/// let instances = vec![Instance::new("u1", 10.0, vec![6.0, 4.0]).unwrap()];
/// let config = IlsConfig::default().with_time_budget(0.01).with_seed(1);
/// let reports = IlsRunner::run_batch(&instances, &config, |_, _| {}).unwrap();
///
/// let mut out = Vec::new();
/// write_text_report(&mut out, &reports, true).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Instance u1: bins = 1\n   Bin 1: 6.00 4.00\n"
/// );
/// ```
pub fn write_text_report<W: Write>(
    mut writer: W,
    reports: &[InstanceReport],
    show_bins: bool,
) -> io::Result<()> {
    for report in reports {
        writeln!(
            writer,
            "Instance {}: bins = {}",
            report.id, report.result.fitness.bin_count
        )?;
        if show_bins {
            for (k, bin) in report.result.packing.bins().iter().enumerate() {
                let items: Vec<String> = bin.items().iter().map(|x| format!("{x:.2}")).collect();
                writeln!(writer, "   Bin {}: {}", k + 1, items.join(" "))?;
            }
        }
    }
    writer.flush()
}

/// Serialized form of one instance result.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Instance identifier.
    pub id: &'a str,
    /// Bins in the best packing.
    pub bins: usize,
    /// Total waste of the best packing.
    pub waste: f64,
    /// Bins in the constructed starting packing.
    pub initial_bins: usize,
    /// ILS iterations performed.
    pub iterations: usize,
    /// Time spent on the instance, in seconds.
    pub elapsed_secs: f64,
    /// Best packing, one array of item sizes per bin.
    pub packing: &'a Packing,
}

impl<'a> From<&'a InstanceReport> for JsonReport<'a> {
    fn from(report: &'a InstanceReport) -> Self {
        let result = &report.result;
        Self {
            id: &report.id,
            bins: result.fitness.bin_count,
            waste: result.fitness.total_waste,
            initial_bins: result.initial_fitness.bin_count,
            iterations: result.iterations,
            elapsed_secs: result.elapsed.as_secs_f64(),
            packing: &result.packing,
        }
    }
}

/// Writes all results as a pretty-printed JSON array of [`JsonReport`]s.
pub fn write_json_report<W: Write>(mut writer: W, reports: &[InstanceReport]) -> io::Result<()> {
    let json: Vec<JsonReport<'_>> = reports.iter().map(JsonReport::from).collect();
    serde_json::to_writer_pretty(&mut writer, &json).map_err(io::Error::from)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::fitness;
    use crate::ils::IlsResult;
    use crate::models::Bin;
    use std::time::Duration;

    fn report(id: &str, bins: Vec<Bin>) -> InstanceReport {
        let packing = Packing::from_bins(bins);
        let f = fitness(&packing, 10.0);
        InstanceReport {
            id: id.to_string(),
            result: IlsResult {
                packing,
                fitness: f,
                initial_fitness: f,
                iterations: 7,
                elapsed: Duration::from_millis(250),
            },
        }
    }

    #[test]
    fn test_text_report_counts_only() {
        let reports = vec![
            report("a", vec![Bin::from_items(vec![6.0, 4.0])]),
            report("b", vec![Bin::with_item(3.0), Bin::with_item(9.0)]),
        ];
        let mut out = Vec::new();
        write_text_report(&mut out, &reports, false).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Instance a: bins = 1\nInstance b: bins = 2\n"
        );
    }

    #[test]
    fn test_text_report_bins_two_decimals() {
        let reports = vec![report(
            "a",
            vec![Bin::from_items(vec![0.126, 3.0]), Bin::with_item(9.999)],
        )];
        let mut out = Vec::new();
        write_text_report(&mut out, &reports, true).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Instance a: bins = 2\n   Bin 1: 0.13 3.00\n   Bin 2: 10.00\n"
        );
    }

    #[test]
    fn test_text_report_empty_instance() {
        let reports = vec![report("e", vec![])];
        let mut out = Vec::new();
        write_text_report(&mut out, &reports, true).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Instance e: bins = 0\n");
    }

    #[test]
    fn test_json_report_fields() {
        let reports = vec![report("a", vec![Bin::from_items(vec![6.0, 3.0])])];
        let mut out = Vec::new();
        write_json_report(&mut out, &reports).expect("write");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        let first = &value[0];
        assert_eq!(first["id"], "a");
        assert_eq!(first["bins"], 1);
        assert_eq!(first["iterations"], 7);
        assert_eq!(first["elapsed_secs"], 0.25);
        assert_eq!(first["packing"], serde_json::json!([[6.0, 3.0]]));
        assert!((first["waste"].as_f64().expect("number") - 1.0).abs() < 1e-10);
    }
}
