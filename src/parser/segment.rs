//! Line-oriented segmentation of a probe report into hop chunks.
//!
//! A hop starts on any line whose first non-blank token is an integer.
//! Lines before the first such marker (the tool's banner) are dropped;
//! every other line belongs to the most recent hop.

/// The raw text belonging to one hop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopChunk<'a> {
    /// Leading integer token of the marker line
    pub marker: &'a str,

    /// Remainder of the marker line, then any continuation lines
    pub lines: Vec<&'a str>,
}

impl HopChunk<'_> {
    /// Hop number, or None when the marker overflows
    pub fn hop_index(&self) -> Option<u32> {
        self.marker.parse().ok()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

enum State<'a> {
    Preamble,
    InHop(HopChunk<'a>),
}

/// Split a report into hop chunks, preserving report order
pub fn segment_hops(report: &str) -> Vec<HopChunk<'_>> {
    let mut chunks = Vec::new();
    let mut state = State::Preamble;

    for line in report.lines() {
        state = match (state, split_hop_marker(line)) {
            (State::Preamble, None) => State::Preamble,
            (State::InHop(mut chunk), None) => {
                chunk.lines.push(line);
                State::InHop(chunk)
            }
            (previous, Some((marker, rest))) => {
                if let State::InHop(chunk) = previous {
                    chunks.push(chunk);
                }
                State::InHop(HopChunk {
                    marker,
                    lines: vec![rest],
                })
            }
        };
    }

    if let State::InHop(chunk) = state {
        chunks.push(chunk);
    }

    chunks
}

/// Split `"  3  router (10.0.0.1) ..."` into `("3", "  router (10.0.0.1) ...")`
fn split_hop_marker(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let token = &trimmed[..end];

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        Some((token, &trimmed[end..]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_is_dropped() {
        let report = "traceroute to example.com (93.184.216.34), 30 hops max\n 1  10.0.0.1  1.0 ms\n";
        let chunks = segment_hops(report);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].marker, "1");
        assert!(!chunks[0].text().contains("93.184.216.34"));
    }

    #[test]
    fn test_continuation_lines_stay_with_hop() {
        let report = " 7  a (1.1.1.1)  10.1 ms\n    b (1.1.1.2)  10.5 ms\n 8  * * *\n";
        let chunks = segment_hops(report);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines.len(), 2);
        assert!(chunks[0].text().contains("1.1.1.2"));
        assert_eq!(chunks[1].hop_index(), Some(8));
    }

    #[test]
    fn test_no_marker_yields_nothing() {
        assert!(segment_hops("").is_empty());
        assert!(segment_hops("connect: Network is unreachable\n").is_empty());
    }

    #[test]
    fn test_decimal_is_not_a_marker() {
        assert!(split_hop_marker("  2.5 ms").is_none());
        assert!(split_hop_marker("12abc").is_none());
        assert_eq!(split_hop_marker("12"), Some(("12", "")));
    }

    #[test]
    fn test_overflowing_marker_has_no_index() {
        let chunks = segment_hops("99999999999  10.0.0.1  1.0 ms\n");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].hop_index(), None);
    }
}
