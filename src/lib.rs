//! hopstat
//!
//! Multi-run traceroute latency statistics.
//!
//! Probes the path to a host several times (or replays captured probe
//! reports), parses every report into per-hop latency samples, and
//! combines the runs into per-hop mean, minimum, maximum and median
//! latency, with a JSON report and an SVG box plot as output.
//!
//! ## Getting Started
//!
//! ```bash
//! hopstat trace example.com --runs 5 --chart hops.svg --summary
//! hopstat replay ./captures --output report.json
//! ```
//!
//! ## Library use
//!
//! ```
//! use hopstat::aggregator::aggregate_runs;
//! use hopstat::parser::RunParser;
//! use hopstat::resolver::LiteralResolver;
//!
//! let parser = RunParser::new(LiteralResolver).unwrap();
//! let run = parser.parse_run(" 1  10.0.0.1  1.5 ms  2.5 ms\n 2  * * *\n");
//! let hops = aggregate_runs(&[run]);
//!
//! assert_eq!(hops.len(), 2);
//! assert_eq!(hops[0].avg, Some(2.0));
//! assert_eq!(hops[1].avg, None);
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod probe;
pub mod resolver;
pub mod utils;
