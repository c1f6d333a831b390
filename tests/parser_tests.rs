use hopstat::parser::{segment_hops, RunParser};
use hopstat::resolver::{AddressResolver, LiteralResolver};
use std::collections::HashMap;

const LINUX_REPORT: &str = "\
traceroute to example.com (93.184.216.34), 30 hops max, 60 byte packets
 1  _gateway (192.168.1.1)  0.512 ms  0.480 ms  0.470 ms
 2  10.10.0.1 (10.10.0.1)  8.101 ms * 8.004 ms
 3  * * *
 4  ae-1.edge (198.51.100.7)  12.400 ms
    ae-2.edge (198.51.100.8)  12.900 ms  13.100 ms
 5  93.184.216.34 (93.184.216.34)  20.100 ms  19.900 ms  20.000 ms
";

/// Resolver with a fixed table; unknown addresses fall back to the literal
struct TableResolver(HashMap<&'static str, &'static str>);

impl AddressResolver for TableResolver {
    fn resolve(&self, address: &str) -> String {
        self.0
            .get(address)
            .map(|name| name.to_string())
            .unwrap_or_else(|| address.to_string())
    }
}

fn literal_parser() -> RunParser<LiteralResolver> {
    RunParser::new(LiteralResolver).unwrap()
}

#[test]
fn test_one_sample_per_chunk_in_order() {
    let chunks = segment_hops(LINUX_REPORT);
    let run = literal_parser().parse_run(LINUX_REPORT);

    assert_eq!(chunks.len(), 5);
    assert_eq!(run.len(), 5);
    let hops: Vec<Option<u32>> = run.iter().map(|s| s.hop).collect();
    assert_eq!(hops, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

#[test]
fn test_latencies_and_stats() {
    let run = literal_parser().parse_run(LINUX_REPORT);

    assert_eq!(run[0].latencies, vec![0.512, 0.480, 0.470]);
    assert_eq!(run[0].stats.min, Some(0.470));
    assert_eq!(run[0].stats.max, Some(0.512));
    assert_eq!(run[0].stats.med, Some(0.480));

    // A lost probe ("*") just contributes no sample
    assert_eq!(run[1].latencies, vec![8.101, 8.004]);
}

#[test]
fn test_timeout_hop_keeps_position() {
    let run = literal_parser().parse_run(LINUX_REPORT);

    assert_eq!(run[2].hop, Some(3));
    assert!(run[2].latencies.is_empty());
    assert!(run[2].addresses.is_empty());
    assert_eq!(run[2].stats.avg, None);
    assert_eq!(run[2].stats.min, None);
    assert_eq!(run[2].stats.max, None);
    assert_eq!(run[2].stats.med, None);
}

#[test]
fn test_multi_line_hop_collects_all_tokens() {
    let run = literal_parser().parse_run(LINUX_REPORT);

    assert_eq!(run[3].latencies, vec![12.400, 12.900, 13.100]);
    assert_eq!(run[3].addresses, vec!["198.51.100.7", "198.51.100.8"]);
}

#[test]
fn test_every_address_token_is_collected() {
    let run = literal_parser().parse_run(LINUX_REPORT);

    // Numeric host name plus the parenthesised address
    assert_eq!(run[1].addresses, vec!["10.10.0.1", "10.10.0.1"]);
    assert_eq!(run[1].hosts.len(), run[1].addresses.len());
}

#[test]
fn test_hosts_are_resolved_in_order() {
    let resolver = TableResolver(HashMap::from([("192.168.1.1", "gateway.lan")]));
    let parser = RunParser::new(resolver).unwrap();
    let run = parser.parse_run(" 1  192.168.1.1  1.0 ms\n 2  203.0.113.5  2.0 ms\n");

    assert_eq!(run[0].hosts, vec!["gateway.lan"]);
    assert_eq!(run[1].hosts, vec!["203.0.113.5"]);
}

#[test]
fn test_skipped_hop_number_keeps_emitted_position() {
    let run = literal_parser().parse_run(" 1  10.0.0.1  1.0 ms\n 3  10.0.0.3  3.0 ms\n");

    assert_eq!(run.len(), 2);
    assert_eq!(run[1].hop, Some(3));
}

#[test]
fn test_no_marker_gives_empty_run() {
    let parser = literal_parser();
    assert!(parser.parse_run("").is_empty());
    assert!(parser
        .parse_run("traceroute: unknown host nowhere.invalid\n")
        .is_empty());
}

#[test]
fn test_truncated_report_does_not_fail() {
    let run = literal_parser().parse_run(" 1  10.0.0.1  1.0 ms\n 2  10.0.0.");

    assert_eq!(run.len(), 2);
    assert!(run[1].latencies.is_empty());
    assert!(run[1].addresses.is_empty());
}

#[test]
fn test_stats_are_ordered() {
    let run = literal_parser().parse_run(LINUX_REPORT);

    for sample in run.iter().filter(|s| !s.latencies.is_empty()) {
        let (min, max) = (sample.stats.min.unwrap(), sample.stats.max.unwrap());
        let (avg, med) = (sample.stats.avg.unwrap(), sample.stats.med.unwrap());
        assert!(min <= med && med <= max);
        assert!(min <= avg && avg <= max);
    }
}
