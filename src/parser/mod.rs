//! Probe report parsing and the data model shared with reporting.
//!
//! This module handles:
//! - Splitting raw probe text into hop chunks
//! - Extracting latency samples and addresses
//! - Resolving addresses to host names
//! - Defining the per-hop and report schema

pub mod run;
pub mod schema;
pub mod segment;

// Re-export main types
pub use run::{parse_runs, RunParser};
pub use schema::{CombinedHop, HopSample, HopStats, Report, RunResult};
pub use segment::{segment_hops, HopChunk};
