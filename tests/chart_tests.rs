use hopstat::chart::{generate_chart, generate_text_summary, BoxSummary, ChartConfig};
use hopstat::output::write_svg;
use hopstat::parser::CombinedHop;

fn hop(n: u32, stats: Option<(f64, f64, f64)>) -> CombinedHop {
    let (min, med, max) = match stats {
        Some((min, med, max)) => (Some(min), Some(med), Some(max)),
        None => (None, None, None),
    };
    CombinedHop {
        hop: n,
        avg: med,
        min,
        max,
        med,
        hosts: vec![format!("r{}.example.net", n)],
    }
}

#[test]
fn test_chart_has_box_per_hop_with_data() {
    let hops = vec![
        hop(1, Some((0.4, 0.5, 0.7))),
        hop(2, None),
        hop(3, Some((10.0, 12.0, 18.0))),
    ];

    let svg = generate_chart(&hops, None).unwrap();

    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("class=\"box\"").count(), 2);
    assert!(svg.contains("no data"));
    assert!(svg.contains("r3.example.net"));
}

#[test]
fn test_chart_without_data_is_error() {
    assert!(generate_chart(&[], None).is_err());
    assert!(generate_chart(&[hop(1, None)], None).is_err());
}

#[test]
fn test_chart_config_applied() {
    let config = ChartConfig::new()
        .with_title("Path to <example>")
        .with_size(800, 400);
    let svg = generate_chart(&[hop(1, Some((1.0, 2.0, 3.0)))], Some(&config)).unwrap();

    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains("Path to &lt;example&gt;"));
}

#[test]
fn test_box_summary_within_range() {
    let summary = BoxSummary::from_hop(&hop(1, Some((1.0, 1.5, 9.0)))).unwrap();

    assert!(summary.min <= summary.q1);
    assert!(summary.q1 <= summary.med);
    assert!(summary.med <= summary.q3);
    assert!(summary.q3 <= summary.max);
}

#[test]
fn test_text_summary_lists_every_hop() {
    let summary = generate_text_summary(&[hop(1, Some((1.0, 2.0, 3.0))), hop(2, None)]);

    assert!(summary.contains("r1.example.net"));
    assert!(summary.contains("r2.example.net"));
    assert!(summary.contains("2.000"));
}

#[test]
fn test_write_chart_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested/hops.svg");
    let svg = generate_chart(&[hop(1, Some((1.0, 2.0, 3.0)))], None).unwrap();

    write_svg(&svg, &path).unwrap();

    assert!(path.exists());
}
