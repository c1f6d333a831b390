//! Turns one probe run's raw text report into hop samples.
//!
//! Segmentation is handled by [`segment_hops`]; this module pulls the
//! latency and address tokens out of each chunk, resolves the addresses,
//! and derives the per-hop statistics.

use super::schema::{HopSample, HopStats, RunResult};
use super::segment::{segment_hops, HopChunk};
use crate::resolver::AddressResolver;
use crate::utils::config::LATENCY_UNIT;
use crate::utils::error::ParseError;
use log::debug;
use regex::Regex;

/// Parser for probe reports, holding its compiled token patterns and the
/// resolver used for host names
pub struct RunParser<R> {
    resolver: R,
    latency_re: Regex,
    address_re: Regex,
}

impl<R: AddressResolver> RunParser<R> {
    /// Create a parser that resolves hop addresses with `resolver`
    pub fn new(resolver: R) -> Result<Self, ParseError> {
        // The leading class keeps "10.0.0.1 ms" from yielding a "0.1" sample.
        let latency_re = Regex::new(&format!(
            r"(?:^|[^\d.])(\d+(?:\.\d+)?)\s*{}\b",
            LATENCY_UNIT
        ))?;
        let address_re = Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b")?;

        Ok(Self {
            resolver,
            latency_re,
            address_re,
        })
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Parse a full report
    ///
    /// **Public** - main entry point for parsing
    ///
    /// Never fails: a chunk whose tokens cannot be read still yields a
    /// sample with empty lists and absent statistics, so the run keeps its
    /// length for positional aggregation.
    pub fn parse_run(&self, report: &str) -> RunResult {
        let run: RunResult = segment_hops(report)
            .iter()
            .map(|chunk| self.parse_chunk(chunk))
            .collect();

        debug!("Parsed {} hops from report ({} bytes)", run.len(), report.len());
        run
    }

    /// Parse a single hop chunk
    pub fn parse_chunk(&self, chunk: &HopChunk<'_>) -> HopSample {
        let text = chunk.text();

        let latencies = self.extract_latencies(&text);
        let addresses = self.extract_addresses(&text);
        let hosts = addresses
            .iter()
            .map(|address| self.resolver.resolve(address))
            .collect();
        let stats = HopStats::from_latencies(&latencies);

        let hop = chunk.hop_index();
        if hop.is_none() {
            debug!("Unreadable hop marker '{}', keeping sample without index", chunk.marker);
        }

        HopSample {
            hop,
            latencies,
            addresses,
            hosts,
            stats,
        }
    }

    /// Every `<decimal> ms` value, in order of appearance
    ///
    /// A digit run too long for `f64` parses as infinity; it is dropped like
    /// any other unreadable token, since JSON would write it as `null`.
    pub fn extract_latencies(&self, text: &str) -> Vec<f64> {
        self.latency_re
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect()
    }

    /// Every dotted-quad token, in order of appearance, duplicates included
    pub fn extract_addresses(&self, text: &str) -> Vec<String> {
        self.address_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Parse every raw report with one parser, preserving run order
pub fn parse_runs<R: AddressResolver>(parser: &RunParser<R>, reports: &[String]) -> Vec<RunResult> {
    reports.iter().map(|report| parser.parse_run(report)).collect()
}
