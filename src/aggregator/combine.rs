//! Combine per-run hop samples into one statistic set per hop position.
//!
//! Runs are aligned positionally: the Nth sample of every run is treated
//! as the Nth hop, whatever hop number the report printed.

use super::stats;
use crate::parser::schema::{CombinedHop, HopSample, RunResult};
use log::debug;

/// Aggregate all runs into combined per-hop statistics
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `runs` - Parsed runs in submission order (live run order, or file
///   name order for captures)
///
/// # Returns
/// One `CombinedHop` per position from 1 to the longest run's length.
/// Empty when there are no runs or every run is empty.
///
/// # Host selection
/// The hosts of a position come from the first run, in submission order,
/// that has a sample there. Later runs' hosts are not merged in.
pub fn aggregate_runs(runs: &[RunResult]) -> Vec<CombinedHop> {
    let hop_count = runs.iter().map(Vec::len).max().unwrap_or(0);
    debug!("Aggregating {} runs over {} hop positions", runs.len(), hop_count);

    (0..hop_count)
        .map(|position| combine_position(runs, position))
        .collect()
}

/// Reduce one hop position across all runs
///
/// **Private** - internal helper for aggregate_runs
fn combine_position(runs: &[RunResult], position: usize) -> CombinedHop {
    let samples: Vec<&HopSample> = runs.iter().filter_map(|run| run.get(position)).collect();

    let avgs = present(&samples, |s| s.stats.avg);
    let mins = present(&samples, |s| s.stats.min);
    let maxs = present(&samples, |s| s.stats.max);
    let meds = present(&samples, |s| s.stats.med);

    let hosts = samples
        .first()
        .map(|sample| sample.hosts.clone())
        .unwrap_or_default();

    CombinedHop {
        hop: position as u32 + 1,
        avg: stats::mean(&avgs),
        min: stats::min(&mins),
        max: stats::max(&maxs),
        med: stats::median(&meds),
        hosts,
    }
}

/// Values of one statistic from the samples that have it
fn present(samples: &[&HopSample], field: impl Fn(&HopSample) -> Option<f64>) -> Vec<f64> {
    samples.iter().filter_map(|&sample| field(sample)).collect()
}

/// Number of positions where at least one run produced a latency
pub fn responsive_hops(hops: &[CombinedHop]) -> usize {
    hops.iter().filter(|hop| hop.has_data()).count()
}
