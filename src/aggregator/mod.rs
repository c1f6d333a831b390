//! Cross-run aggregation of hop samples.
//!
//! This module transforms parsed runs into:
//! - Combined per-hop statistics (mean, min, max, median)
//! - A representative host list per hop

pub mod combine;
pub mod stats;

// Re-export main functions
pub use combine::{aggregate_runs, responsive_hops};
