use crate::chart::ChartConfig;
use crate::probe::ProbeCommand;
use crate::utils::config::{DEFAULT_RUNS, DEFAULT_RUN_DELAY};
use std::path::PathBuf;
use std::time::Duration;

/// Where and how results are written, shared by `trace` and `replay`
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Output path for SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart configuration
    pub chart_config: Option<ChartConfig>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output_json: PathBuf::from("report.json"),
            output_svg: None,
            chart_config: None,
            print_summary: false,
        }
    }
}

/// Arguments for the trace command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TraceArgs {
    /// Host name or address to probe
    pub target: String,

    /// Number of probe runs
    pub runs: usize,

    /// Pause between runs
    pub delay: Duration,

    /// External probe program and its fixed arguments
    pub probe: ProbeCommand,

    /// Reverse-resolve hop addresses
    pub resolve: bool,

    /// Directory to archive raw run text in (optional)
    pub save_raw: Option<PathBuf>,

    pub output: OutputOptions,
}

impl Default for TraceArgs {
    fn default() -> Self {
        Self {
            target: String::new(),
            runs: DEFAULT_RUNS,
            delay: DEFAULT_RUN_DELAY,
            probe: ProbeCommand::default(),
            resolve: true,
            save_raw: None,
            output: OutputOptions::default(),
        }
    }
}

/// Arguments for the replay command
#[derive(Debug, Clone)]
pub struct ReplayArgs {
    /// Directory of captured reports, one file per run
    pub capture_dir: PathBuf,

    /// Reverse-resolve hop addresses
    pub resolve: bool,

    pub output: OutputOptions,
}

impl Default for ReplayArgs {
    fn default() -> Self {
        Self {
            capture_dir: PathBuf::from("."),
            resolve: true,
            output: OutputOptions::default(),
        }
    }
}
