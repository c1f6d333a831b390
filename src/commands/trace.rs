//! Trace and replay command implementations.
//!
//! Both commands run the same pipeline:
//! 1. Collect raw run text (live probes or capture files)
//! 2. Parse each run into hop samples
//! 3. Aggregate runs into combined hop statistics
//! 4. Render the chart
//! 5. Write output files

use super::models::{OutputOptions, ReplayArgs, TraceArgs};
use crate::aggregator::{aggregate_runs, responsive_hops};
use crate::chart::{generate_chart, generate_text_summary};
use crate::output::{write_report, write_svg};
use crate::parser::{parse_runs, CombinedHop, Report, RunParser};
use crate::probe::{archive_runs, CapturedRuns, LiveProbe, RunSource};
use crate::resolver::{AddressResolver, CachedResolver, DnsResolver, LiteralResolver};
use crate::utils::config::{MAX_RUNS, SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Execute the trace command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid probe command
/// * Raw run archive failures
/// * File write errors
///
/// Failed probe runs are skipped; if every run fails the report is still
/// written, with no hops.
pub fn execute_trace(args: TraceArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Starting {} probe runs to {}", args.runs, args.target);

    info!("Step 1/5: Running probes...");
    let probe = LiveProbe::new(args.probe.clone(), args.target.clone(), args.runs, args.delay);
    let raw_runs = probe.collect_runs().context("Failed to run probes")?;

    if let Some(dir) = &args.save_raw {
        archive_runs(&raw_runs, dir).context("Failed to archive raw runs")?;
    }

    let texts: Vec<String> = raw_runs.into_iter().map(|run| run.text).collect();
    let report = analyze_and_write(&texts, Some(&args.target), args.resolve, &args.output)?;

    info!("Trace completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(report)
}

/// Execute the replay command over pre-captured reports
///
/// **Public** - main entry point called from main.rs
pub fn execute_replay(args: ReplayArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Step 1/5: Loading captures from {}...", args.capture_dir.display());
    let raw_runs = CapturedRuns::new(&args.capture_dir)
        .collect_runs()
        .context("Failed to load captured runs")?;

    for run in &raw_runs {
        debug!("Run source: {}", run.label);
    }

    let texts: Vec<String> = raw_runs.into_iter().map(|run| run.text).collect();
    let report = analyze_and_write(&texts, None, args.resolve, &args.output)?;

    info!("Replay completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(report)
}

/// Steps 2-5 shared by trace and replay
///
/// **Private** - internal pipeline
fn analyze_and_write(
    texts: &[String],
    target: Option<&str>,
    resolve: bool,
    output: &OutputOptions,
) -> Result<Report> {
    info!("Step 2/5: Parsing {} runs...", texts.len());
    let parser = RunParser::new(build_resolver(resolve)).context("Failed to build run parser")?;
    let runs = parse_runs(&parser, texts);

    info!("Step 3/5: Aggregating runs...");
    let hops = aggregate_runs(&runs);
    info!(
        "Aggregated {} hop positions ({} with latency data)",
        hops.len(),
        responsive_hops(&hops)
    );

    let svg_content = match &output.output_svg {
        Some(_) if hops.is_empty() => {
            warn!("Step 4/5: No hops to chart, skipping chart");
            None
        }
        Some(_) => {
            info!("Step 4/5: Generating chart...");
            match generate_chart(&hops, output.chart_config.as_ref()) {
                Ok(svg) => Some(svg),
                Err(e) => {
                    warn!("Skipping chart: {}", e);
                    None
                }
            }
        }
        None => {
            info!("Step 4/5: Skipping chart generation (not requested)");
            None
        }
    };

    info!("Step 5/5: Writing output files...");
    let report = build_report(target, runs.len(), hops);

    write_report(&report, &output.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", output.output_json.display());

    if let (Some(svg), Some(svg_path)) = (svg_content, &output.output_svg) {
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;
        info!("✓ Chart written to: {}", svg_path.display());
    }

    if output.print_summary {
        print_summary(&report);
    }

    Ok(report)
}

/// System DNS behind a per-address cache, or no lookups at all
fn build_resolver(resolve: bool) -> Box<dyn AddressResolver> {
    if resolve {
        Box::new(CachedResolver::new(DnsResolver::new()))
    } else {
        Box::new(LiteralResolver)
    }
}

/// Wrap combined hops in the versioned report envelope
///
/// **Public** - also used by tests
pub fn build_report(target: Option<&str>, runs: usize, hops: Vec<CombinedHop>) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        target: target.map(str::to_string),
        runs,
        generated_at: Utc::now().to_rfc3339(),
        hops,
    }
}

fn print_summary(report: &Report) {
    println!("\n{}", "=".repeat(80));
    println!("HOP LATENCY SUMMARY");
    println!("{}", "=".repeat(80));
    if let Some(target) = &report.target {
        println!("Target: {}", target);
    }
    println!("Runs:   {}", report.runs);

    if report.hops.is_empty() {
        println!("\nNo data available");
    } else {
        println!("\n{}", generate_text_summary(&report.hops));
    }
    println!("{}", "=".repeat(80));
}

/// Validate trace arguments
///
/// **Public** - can be called before execute_trace for early validation
pub fn validate_args(args: &TraceArgs) -> Result<()> {
    if args.target.trim().is_empty() {
        anyhow::bail!("Target cannot be empty");
    }

    if args.target.chars().any(char::is_whitespace) {
        anyhow::bail!("Target must not contain whitespace");
    }

    if args.target.starts_with('-') {
        anyhow::bail!("Target must not start with '-'");
    }

    if args.runs == 0 {
        anyhow::bail!("runs must be greater than 0");
    }

    if args.runs > MAX_RUNS {
        anyhow::bail!("runs is too large (max {})", MAX_RUNS);
    }

    if args.probe.program.trim().is_empty() {
        anyhow::bail!("Probe command cannot be empty");
    }

    Ok(())
}

/// Convert the `--delay-secs` value into a run delay
///
/// Rejects negative, non-finite, and values too large for a `Duration`.
pub fn parse_delay(secs: f64) -> Result<Duration> {
    if secs < 0.0 {
        anyhow::bail!("delay must be a non-negative number of seconds");
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| anyhow::anyhow!("invalid delay of {} seconds: {}", secs, e))
}

/// Validate replay arguments
pub fn validate_replay_args(args: &ReplayArgs) -> Result<()> {
    if !args.capture_dir.is_dir() {
        anyhow::bail!(
            "Capture directory does not exist: {}",
            args.capture_dir.display()
        );
    }
    Ok(())
}
