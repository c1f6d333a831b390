//! Per-hop data model and the JSON report schema.
//!
//! Every statistic is an `Option<f64>`: `None` means the hop produced no
//! samples and serializes as an explicit `null`, never as `0`.

use crate::aggregator::stats;
use serde::{Deserialize, Serialize};

/// Single-run statistics derived from one hop's latency samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HopStats {
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub med: Option<f64>,
}

impl HopStats {
    /// Derive statistics from latency samples (all absent if empty)
    pub fn from_latencies(latencies: &[f64]) -> Self {
        Self {
            avg: stats::mean(latencies),
            min: stats::min(latencies),
            max: stats::max(latencies),
            med: stats::median(latencies),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg.is_none() && self.min.is_none() && self.max.is_none() && self.med.is_none()
    }
}

/// One hop of one probe run, as scraped from the report text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopSample {
    /// Hop number printed in the report (None if the marker was unreadable)
    pub hop: Option<u32>,

    /// Round-trip times in milliseconds, in report order
    pub latencies: Vec<f64>,

    /// Address tokens in report order (may repeat)
    pub addresses: Vec<String>,

    /// Resolved names, positionally aligned with `addresses`
    pub hosts: Vec<String>,

    #[serde(flatten)]
    pub stats: HopStats,
}

/// Ordered hop samples of a single run; index 0 is the first hop
pub type RunResult = Vec<HopSample>;

/// Cross-run statistics for one hop position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedHop {
    /// 1-based hop position
    pub hop: u32,
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub med: Option<f64>,

    /// Hosts reported by the first run that reached this position
    pub hosts: Vec<String>,
}

impl CombinedHop {
    pub fn has_data(&self) -> bool {
        self.avg.is_some() || self.min.is_some() || self.max.is_some() || self.med.is_some()
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Probe target (absent for replayed captures)
    pub target: Option<String>,

    /// Number of runs that contributed to the aggregate
    pub runs: usize,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Combined per-hop statistics, ordered by hop
    pub hops: Vec<CombinedHop>,
}
