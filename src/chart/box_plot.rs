//! SVG box plot of per-hop latency distributions, plus a terminal table.
//!
//! Hand-rolled SVG, one column per hop position. Boxes use an
//! approximate five-number summary (see [`BoxSummary`]).

use crate::parser::schema::CombinedHop;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_TITLE, DEFAULT_CHART_WIDTH};
use crate::utils::error::ChartError;
use log::info;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;
const Y_TICKS: usize = 5;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Five-number summary used to draw one box.
///
/// The quartiles are not computed from samples: the interquartile range is
/// taken as half the min–max span, centred on the median and clamped to
/// `[min, max]`. Good enough to eyeball spread; not a statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub med: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    /// None unless the hop has min, median and max
    pub fn from_hop(hop: &CombinedHop) -> Option<Self> {
        let (min, med, max) = (hop.min?, hop.med?, hop.max?);
        let half_iqr = (max - min) / 4.0;

        Some(Self {
            min,
            q1: (med - half_iqr).clamp(min, max),
            med,
            q3: (med + half_iqr).clamp(min, max),
            max,
        })
    }
}

/// Generate an SVG box plot from combined hops
///
/// # Errors
/// * `ChartError::EmptyHops` - no hop has enough data for a box
pub fn generate_chart(hops: &[CombinedHop], config: Option<&ChartConfig>) -> Result<String, ChartError> {
    let boxes: Vec<(&CombinedHop, Option<BoxSummary>)> =
        hops.iter().map(|hop| (hop, BoxSummary::from_hop(hop))).collect();

    let y_max = boxes
        .iter()
        .filter_map(|(_, summary)| summary.map(|s| s.max))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .ok_or(ChartError::EmptyHops)?;

    let config = config.cloned().unwrap_or_default();
    info!("Generating box plot for {} hops", hops.len());

    let width = config.width as f64;
    let height = config.height as f64;
    let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let y_top = nice_ceiling(y_max * 1.1);

    // Latency to y pixel
    let scale_y = |ms: f64| MARGIN_TOP + plot_h - (ms / y_top) * plot_h;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(
        r#"<style>.hop { font: 11px sans-serif; } .box:hover { stroke-width: 2; cursor: pointer; opacity: 0.9; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&config.title)
    ));

    render_axes(&mut svg, plot_w, plot_h, y_top);

    let slot = plot_w / boxes.len() as f64;
    let box_w = (slot * 0.6).clamp(2.0, 40.0);

    for (i, (hop, summary)) in boxes.iter().enumerate() {
        let cx = MARGIN_LEFT + slot * (i as f64 + 0.5);

        svg.push_str(&format!(
            r#"<text class="hop" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            cx,
            MARGIN_TOP + plot_h + 16.0,
            hop.hop
        ));

        match summary {
            Some(s) => render_box(&mut svg, hop, s, cx, box_w, &scale_y),
            None => svg.push_str(&format!(
                r##"<text class="hop" x="{:.2}" y="{:.2}" text-anchor="middle" fill="#999">no data</text>"##,
                cx,
                MARGIN_TOP + plot_h - 6.0
            )),
        }
    }

    svg.push_str("</svg>");

    info!("Chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn render_axes(out: &mut String, plot_w: f64, plot_h: f64, y_top: f64) {
    let x0 = MARGIN_LEFT;
    let y0 = MARGIN_TOP + plot_h;

    out.push_str(&format!(
        r#"<line x1="{x0:.2}" y1="{MARGIN_TOP:.2}" x2="{x0:.2}" y2="{y0:.2}" stroke="black"/>"#
    ));
    out.push_str(&format!(
        r#"<line x1="{x0:.2}" y1="{y0:.2}" x2="{:.2}" y2="{y0:.2}" stroke="black"/>"#,
        x0 + plot_w
    ));

    for tick in 0..=Y_TICKS {
        let ms = y_top * tick as f64 / Y_TICKS as f64;
        let y = y0 - plot_h * tick as f64 / Y_TICKS as f64;
        out.push_str(&format!(
            r##"<line x1="{x0:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="#ddd"/>"##,
            x0 + plot_w
        ));
        out.push_str(&format!(
            r#"<text class="hop" x="{:.2}" y="{:.2}" text-anchor="end">{:.1} ms</text>"#,
            x0 - 6.0,
            y + 4.0,
            ms
        ));
    }

    out.push_str(&format!(
        r#"<text class="hop" x="{:.2}" y="{:.2}" text-anchor="middle">hop</text>"#,
        x0 + plot_w / 2.0,
        y0 + 36.0
    ));
}

fn render_box(
    out: &mut String,
    hop: &CombinedHop,
    s: &BoxSummary,
    cx: f64,
    box_w: f64,
    scale_y: &impl Fn(f64) -> f64,
) {
    let color = latency_color(s.med);
    let tooltip = format!(
        "hop {}: min {:.3} / med {:.3} / max {:.3} ms{}",
        hop.hop,
        s.min,
        s.med,
        s.max,
        hop.hosts
            .first()
            .map(|h| format!(" ({})", h))
            .unwrap_or_default()
    );

    // Whisker
    out.push_str(&format!(
        r#"<line x1="{cx:.2}" y1="{:.2}" x2="{cx:.2}" y2="{:.2}" stroke="{color}"/>"#,
        scale_y(s.max),
        scale_y(s.min)
    ));

    let top = scale_y(s.q3);
    let box_h = (scale_y(s.q1) - top).max(1.0);
    out.push_str(&format!(
        r#"<rect class="box" x="{:.2}" y="{top:.2}" width="{box_w:.2}" height="{box_h:.2}" fill="{color}" fill-opacity="0.6" stroke="{color}"><title>{}</title></rect>"#,
        cx - box_w / 2.0,
        escape_xml(&tooltip)
    ));

    // Median
    let med_y = scale_y(s.med);
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{med_y:.2}" x2="{:.2}" y2="{med_y:.2}" stroke="black" stroke-width="2"/>"#,
        cx - box_w / 2.0,
        cx + box_w / 2.0
    ));

    if let Some(avg) = hop.avg {
        out.push_str(&format!(
            r#"<circle cx="{cx:.2}" cy="{:.2}" r="2.5" fill="white" stroke="black"/>"#,
            scale_y(avg)
        ));
    }
}

/// Round up to 1, 2 or 5 times a power of ten
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

fn latency_color(ms: f64) -> &'static str {
    if ms < 20.0 {
        "rgb(34, 139, 34)" // Forest Green
    } else if ms < 100.0 {
        "rgb(255, 140, 0)" // Dark Orange
    } else {
        "rgb(220, 20, 60)" // Crimson
    }
}

fn ansi_color(ms: Option<f64>) -> &'static str {
    match ms {
        Some(ms) if ms < 20.0 => "\x1b[32m",
        Some(ms) if ms < 100.0 => "\x1b[33m",
        Some(_) => "\x1b[31;1m",
        None => "\x1b[90m",
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn format_ms(value: Option<f64>) -> String {
    value.map_or_else(|| "*".to_string(), |v| format!("{:.3}", v))
}

/// Table of combined statistics for the terminal
pub fn generate_text_summary(hops: &[CombinedHop]) -> String {
    let mut lines = Vec::new();

    lines.push("  ┏━━━━━┳━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:>3} ┃ {:>8} ┃ {:>8} ┃ {:>8} ┃ {:>8} ┃ {:<30} ┃",
        "HOP", "AVG", "MIN", "MAX", "MED", "HOST"
    ));
    lines.push("  ┣━━━━━╋━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┫".to_string());

    for hop in hops {
        let host = hop.hosts.first().map(String::as_str).unwrap_or("*");
        let display_host = if host.chars().count() > 30 {
            format!("{}...", host.chars().take(27).collect::<String>())
        } else {
            host.to_string()
        };
        let color = ansi_color(hop.med);
        let reset = "\x1b[0m";

        lines.push(format!(
            "  ┃ {:>3} ┃ {}{:>8}{} ┃ {:>8} ┃ {:>8} ┃ {:>8} ┃ {:<30} ┃",
            hop.hop,
            color,
            format_ms(hop.avg),
            reset,
            format_ms(hop.min),
            format_ms(hop.max),
            format_ms(hop.med),
            display_host
        ));
    }

    lines.push("  ┗━━━━━┻━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".to_string());
    lines.join("\n")
}
