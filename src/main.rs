//! hopstat CLI
//!
//! Probes a network path several times and reports per-hop latency
//! statistics as JSON, an SVG box plot, and a terminal table.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use hopstat::chart::ChartConfig;
use hopstat::commands::{
    display_schema, display_version, execute_replay, execute_trace, parse_delay, validate_args,
    validate_replay_args, validate_report_file, OutputOptions, ReplayArgs, TraceArgs,
};
use hopstat::probe::ProbeCommand;
use hopstat::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_PROBE_PROGRAM, DEFAULT_RUNS,
    DEFAULT_RUN_DELAY,
};

/// hopstat - per-hop latency statistics across repeated traceroutes
#[derive(Parser, Debug)]
#[command(name = "hopstat")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Output flags shared by trace and replay
#[derive(Args, Debug)]
struct OutputFlags {
    /// Output path for JSON report
    #[arg(short, long, default_value = "report.json")]
    output: PathBuf,

    /// Output path for SVG box plot (optional)
    #[arg(short, long)]
    chart: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: usize,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    height: usize,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Show raw addresses instead of reverse-resolved names
    #[arg(short = 'n', long)]
    no_resolve: bool,
}

impl OutputFlags {
    fn into_options(self) -> OutputOptions {
        let chart_config = self.chart.as_ref().map(|_| {
            let config = ChartConfig::new().with_size(self.width, self.height);
            match self.title {
                Some(title) => config.with_title(title),
                None => config,
            }
        });

        OutputOptions {
            output_json: self.output,
            output_svg: self.chart,
            chart_config,
            print_summary: self.summary,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Probe a target several times and aggregate the runs
    Trace {
        /// Host name or address to probe
        target: String,

        /// Number of probe runs
        #[arg(short, long, default_value_t = DEFAULT_RUNS)]
        runs: usize,

        /// Seconds to wait between runs
        #[arg(short, long, default_value_t = DEFAULT_RUN_DELAY.as_secs_f64())]
        delay_secs: f64,

        /// Probe program (traceroute-compatible output)
        #[arg(long, env = "HOPSTAT_PROBE_CMD", default_value = DEFAULT_PROBE_PROGRAM)]
        probe_cmd: String,

        /// Extra argument passed to the probe program (repeatable)
        #[arg(long = "probe-arg", allow_hyphen_values = true)]
        probe_args: Vec<String>,

        /// Save each run's raw output in this directory for later replay
        #[arg(long)]
        save_raw: Option<PathBuf>,

        #[command(flatten)]
        out: OutputFlags,
    },

    /// Aggregate previously captured probe reports, one file per run
    Replay {
        /// Directory of captured reports (read in file name order)
        dir: PathBuf,

        #[command(flatten)]
        out: OutputFlags,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Trace {
            target,
            runs,
            delay_secs,
            probe_cmd,
            probe_args,
            save_raw,
            out,
        } => {
            let args = TraceArgs {
                target,
                runs,
                delay: parse_delay(delay_secs)?,
                probe: ProbeCommand::new(probe_cmd).with_args(probe_args),
                resolve: !out.no_resolve,
                save_raw,
                output: out.into_options(),
            };

            // Validate args first
            validate_args(&args)?;

            execute_trace(args)?;
        }

        Commands::Replay { dir, out } => {
            let args = ReplayArgs {
                capture_dir: dir,
                resolve: !out.no_resolve,
                output: out.into_options(),
            };

            validate_replay_args(&args)?;

            execute_replay(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
