//! Per-hop latency charts.
//!
//! Renders combined hop statistics as an SVG box plot and as a
//! terminal table.

pub mod box_plot;

// Re-export main types
pub use box_plot::{generate_chart, generate_text_summary, BoxSummary, ChartConfig};
