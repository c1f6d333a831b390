//! Configuration and constants for the CLI.

use std::time::Duration;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Probe program used when neither `--probe-cmd` nor `HOPSTAT_PROBE_CMD` is set
pub const DEFAULT_PROBE_PROGRAM: &str = "traceroute";

/// Number of probe runs per target
pub const DEFAULT_RUNS: usize = 5;
pub const MAX_RUNS: usize = 100;

/// Pause between consecutive probe runs.
// Back-to-back traceroutes can trip ICMP rate limits on intermediate routers.
pub const DEFAULT_RUN_DELAY: Duration = Duration::from_secs(5);

/// Distinct addresses kept by the reverse-lookup cache
pub const DEFAULT_RESOLVER_CACHE_SIZE: usize = 1024;

/// Unit marker that follows every latency sample in a probe report
pub const LATENCY_UNIT: &str = "ms";

// Chart geometry
pub const DEFAULT_CHART_WIDTH: usize = 1200;
pub const DEFAULT_CHART_HEIGHT: usize = 600;
pub const DEFAULT_CHART_TITLE: &str = "Per-hop latency distribution";

/// File name pattern for archived raw runs; zero-padded so they replay in order
pub fn raw_run_file_name(run_number: usize) -> String {
    format!("run_{:03}.txt", run_number)
}
