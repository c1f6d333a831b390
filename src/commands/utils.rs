use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;
    let with_data = report.hops.iter().filter(|hop| hop.has_data()).count();

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Target: {}", report.target.as_deref().unwrap_or("(captured)"));
    println!("  Runs: {}", report.runs);
    println!("  Hops: {} ({} with latency data)", report.hops.len(), with_data);
    println!("  Generated: {}", report.generated_at);

    if report.hops.is_empty() {
        println!("  No data available");
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("hopstat Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string        - Schema version (e.g., '1.0.0')");
        println!("  target: string?        - Probe target (null for replays)");
        println!("  runs: number           - Runs that contributed to the aggregate");
        println!("  generated_at: string   - ISO 8601 timestamp");
        println!("  hops: array            - Combined per-hop statistics");
        println!("    hop: number          - 1-based hop position");
        println!("    avg: number?         - Mean of per-run averages (ms)");
        println!("    min: number?         - Minimum of per-run minimums (ms)");
        println!("    max: number?         - Maximum of per-run maximums (ms)");
        println!("    med: number?         - Median of per-run medians (ms)");
        println!("    hosts: array         - Hosts seen by the first run reaching the hop");
        println!();
        println!("  null means no run produced a sample at that hop.");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("hopstat v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Multi-run traceroute latency statistics per hop.");
}
