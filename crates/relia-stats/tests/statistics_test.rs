//! Tests for reliability curve statistics.

use proptest::prelude::*;

use relia_core::config::StatisticsConfig;
use relia_core::models::ReliabilityCurve;
use relia_stats::{ReliabilityStatistics, SummaryValue};

fn curve(samples: &[(f64, f64)]) -> ReliabilityCurve {
    ReliabilityCurve::from_samples(samples.iter().copied()).unwrap()
}

fn linear() -> ReliabilityCurve {
    curve(&[(0.0, 1.0), (10.0, 0.0)])
}

// ---- MTTF ----

#[test]
fn mttf_of_linear_decay() {
    let c = linear();
    assert_eq!(ReliabilityStatistics::new(&c).mean_time_to_failure(), 5.0);
}

#[test]
fn mttf_irregular_spacing() {
    let c = curve(&[(0.0, 1.0), (1.0, 0.8), (4.0, 0.2)]);
    // 1 * 0.9 + 3 * 0.5
    let mttf = ReliabilityStatistics::new(&c).mean_time_to_failure();
    assert!((mttf - 2.4).abs() < 1e-12);
}

#[test]
fn mttf_degenerate_curves() {
    let empty = ReliabilityCurve::empty();
    assert_eq!(ReliabilityStatistics::new(&empty).mean_time_to_failure(), 0.0);
    let single = curve(&[(3.0, 0.7)]);
    assert_eq!(ReliabilityStatistics::new(&single).mean_time_to_failure(), 0.0);
}

// ---- availability ----

#[test]
fn availability_interpolates() {
    let c = linear();
    let stats = ReliabilityStatistics::new(&c);
    assert_eq!(stats.availability(5.0), 0.5);
    assert!((stats.availability(2.5) - 0.75).abs() < 1e-12);
}

#[test]
fn availability_exact_sample() {
    let c = curve(&[(0.0, 1.0), (2.0, 0.9), (4.0, 0.4)]);
    let stats = ReliabilityStatistics::new(&c);
    assert_eq!(stats.availability(2.0), 0.9);
    assert_eq!(stats.availability(4.0), 0.4);
}

#[test]
fn availability_clamps_outside_range() {
    let c = curve(&[(1.0, 0.95), (2.0, 0.5)]);
    let stats = ReliabilityStatistics::new(&c);
    assert_eq!(stats.availability(0.0), 0.95);
    assert_eq!(stats.availability(-3.0), 0.95);
    assert_eq!(stats.availability(100.0), 0.5);
}

#[test]
fn availability_of_empty_curve_is_zero() {
    let empty = ReliabilityCurve::empty();
    assert_eq!(ReliabilityStatistics::new(&empty).availability(1.0), 0.0);
}

// ---- summary ----

#[test]
fn summary_of_empty_curve_is_empty() {
    let empty = ReliabilityCurve::empty();
    let stats = ReliabilityStatistics::new(&empty);
    assert!(stats.summary().is_none());
    assert!(stats.reliability_summary().is_empty());
}

#[test]
fn summary_reports_threshold_crossings() {
    let c = curve(&[(0.0, 1.0), (1.0, 0.95), (2.0, 0.9), (5.0, 0.45), (9.0, 0.2)]);
    let map = ReliabilityStatistics::new(&c).reliability_summary();

    assert_eq!(map.len(), 6);
    assert_eq!(map["max_time"], SummaryValue::Value(9.0));
    assert_eq!(map["min_reliability"], SummaryValue::Value(0.2));
    assert_eq!(map["time_to_90%"], SummaryValue::Value(2.0));
    assert_eq!(map["time_to_50%"], SummaryValue::Value(5.0));
    assert_eq!(map["time_to_10%"], SummaryValue::BeyondSimulationRange);
    let mttf = map["mttf"].as_f64().unwrap();
    assert!((mttf - ReliabilityStatistics::new(&c).mean_time_to_failure()).abs() < 1e-12);
}

#[test]
fn never_reaching_threshold_is_beyond_range() {
    let c = curve(&[(0.0, 1.0), (10.0, 0.95)]);
    let map = ReliabilityStatistics::new(&c).reliability_summary();
    assert_eq!(map["time_to_90%"], SummaryValue::BeyondSimulationRange);
    assert_eq!(map["time_to_90%"].to_string(), "Beyond simulation range");
}

#[test]
fn custom_thresholds_from_config() {
    let c = linear();
    let config = StatisticsConfig {
        thresholds: vec![0.75, 0.29],
    };
    let map = ReliabilityStatistics::with_config(&c, &config).reliability_summary();
    assert!(map.contains_key("time_to_75%"));
    assert!(map.contains_key("time_to_29%"));
    assert!(!map.contains_key("time_to_90%"));
    // Only samples count: the first sample at or below 0.75 is t = 10.
    assert_eq!(map["time_to_75%"], SummaryValue::Value(10.0));
}

#[test]
fn summary_serializes_sentinel_as_text() {
    let c = curve(&[(0.0, 1.0), (10.0, 0.95)]);
    let map = ReliabilityStatistics::new(&c).reliability_summary();
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(json["time_to_50%"], "Beyond simulation range");
    assert_eq!(json["max_time"], 10.0);
}

#[test]
fn typed_summary_keeps_threshold_order() {
    let c = linear();
    let summary = ReliabilityStatistics::new(&c).summary().unwrap();
    let keys: Vec<String> = summary.crossings.iter().map(|c| c.key()).collect();
    assert_eq!(keys, vec!["time_to_90%", "time_to_50%", "time_to_10%"]);
    assert!(summary.crossings.iter().all(|c| c.time == Some(10.0)));
}

// ---- properties ----

fn curve_strategy() -> impl Strategy<Value = ReliabilityCurve> {
    prop::collection::vec((0.01_f64..5.0, 0.0_f64..=1.0), 2..20).prop_map(|steps| {
        let mut t = 0.0;
        let mut r = 1.0;
        let mut samples = Vec::with_capacity(steps.len());
        for (dt, factor) in steps {
            samples.push((t, r));
            t += dt;
            r *= factor;
        }
        ReliabilityCurve::from_samples(samples).unwrap()
    })
}

proptest! {
    #[test]
    fn availability_stays_between_neighbours(c in curve_strategy(), frac in 0.0_f64..=1.0) {
        let stats = ReliabilityStatistics::new(&c);
        let (t0, _) = c.first().unwrap();
        let (tn, _) = c.last().unwrap();
        let a = stats.availability(t0 + frac * (tn - t0));
        let (lo, hi) = (c.last().unwrap().1, c.first().unwrap().1);
        prop_assert!(a >= lo - 1e-12 && a <= hi + 1e-12);
    }

    #[test]
    fn mttf_bounded_by_range(c in curve_strategy()) {
        let mttf = ReliabilityStatistics::new(&c).mean_time_to_failure();
        let (t0, _) = c.first().unwrap();
        let (tn, _) = c.last().unwrap();
        prop_assert!(mttf >= 0.0 && mttf <= (tn - t0) + 1e-9);
    }
}
