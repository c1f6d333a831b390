//! Order statistics over latency samples.
//!
//! Every reduction returns `None` for an empty input. An empty slice means
//! "no data", which must stay distinguishable from a 0 ms latency.

use std::cmp::Ordering;

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let avg = sum / values.len() as f64;

    // Summation rounding can land a hair outside the sample range
    // (e.g. three 0.1 samples average to 0.10000000000000002).
    match (min(values), max(values)) {
        (Some(lo), Some(hi)) => Some(avg.clamp(lo, hi)),
        _ => Some(avg),
    }
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().min_by(f64::total_cmp)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().max_by(f64::total_cmp)
}

/// Median; the mean of the two middle values for even-length input
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_absent() {
        assert_eq!(mean(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean(&[4.2]), Some(4.2));
        assert_eq!(min(&[4.2]), Some(4.2));
        assert_eq!(max(&[4.2]), Some(4.2));
        assert_eq!(median(&[4.2]), Some(4.2));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_mean_stays_within_range() {
        let values = [0.1, 0.1, 0.1];
        assert_eq!(mean(&values), Some(0.1));
    }

    #[test]
    fn test_zero_latency_is_a_value() {
        assert_eq!(min(&[0.0, 5.0]), Some(0.0));
        assert_eq!(mean(&[0.0]), Some(0.0));
    }
}
