use hopstat::aggregator::aggregate_runs;
use hopstat::commands::build_report;
use hopstat::output::{hops_from_json, hops_to_json, read_report, validate_path, write_report};
use hopstat::parser::{CombinedHop, RunParser};
use hopstat::resolver::LiteralResolver;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_hops() -> Vec<CombinedHop> {
    vec![
        CombinedHop {
            hop: 1,
            avg: Some(0.1 + 0.2),
            min: Some(0.0),
            max: Some(1.0 / 3.0),
            med: Some(0.25),
            hosts: vec!["gateway.lan".to_string(), "192.168.1.1".to_string()],
        },
        CombinedHop {
            hop: 2,
            avg: None,
            min: None,
            max: None,
            med: None,
            hosts: vec![],
        },
        CombinedHop {
            hop: 3,
            avg: Some(20.123456789),
            min: Some(19.9),
            max: None,
            med: Some(20.0),
            hosts: vec!["203.0.113.5".to_string()],
        },
    ]
}

#[test]
fn test_hops_json_roundtrip() {
    let hops = create_test_hops();

    let json = hops_to_json(&hops).unwrap();
    let parsed = hops_from_json(&json).unwrap();

    assert_eq!(parsed, hops);
}

#[test]
fn test_absent_is_null_not_zero_or_missing() {
    let json = hops_to_json(&create_test_hops()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let second = value[1].as_object().unwrap();
    for key in ["hop", "avg", "min", "max", "med", "hosts"] {
        assert!(second.contains_key(key), "missing key {}", key);
    }
    assert!(second["avg"].is_null());
    assert!(second["med"].is_null());

    // A real zero stays a number
    assert_eq!(value[0]["min"], serde_json::json!(0.0));
}

#[test]
fn test_write_and_read_report() {
    let report = build_report(Some("example.com"), 3, create_test_hops());
    let temp_file = NamedTempFile::new().unwrap();

    write_report(&report, temp_file.path()).unwrap();
    let loaded = read_report(temp_file.path()).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_read_report_invalid_json() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    assert!(read_report(temp_file.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_overflowing_sample_roundtrips_as_absent() {
    let parser = RunParser::new(LiteralResolver).unwrap();
    let report = format!(
        " 1  10.0.0.1  {} ms\n 2  10.0.0.2  {} ms  4.0 ms\n",
        "9".repeat(400),
        "9".repeat(400)
    );
    let run = parser.parse_run(&report);

    assert!(run[0].latencies.is_empty());
    assert_eq!(run[0].stats.avg, None);
    assert_eq!(run[1].latencies, vec![4.0]);

    let hops = aggregate_runs(&[run]);
    assert!(hops.iter().flat_map(|h| [h.avg, h.min, h.max, h.med]).flatten().all(f64::is_finite));

    let parsed = hops_from_json(&hops_to_json(&hops).unwrap()).unwrap();
    assert_eq!(parsed, hops);
}
