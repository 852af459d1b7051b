use relia_core::errors::{CurveError, ProbabilityError};
use relia_core::models::*;

fn cut(ids: &[&str]) -> CutSet {
    ids.iter().copied().collect()
}

// ---- Cut-set families ----

#[test]
fn family_is_canonical_and_deduplicated() {
    let a = CutSetFamily::new(vec![cut(&["B", "C"]), cut(&["A"]), cut(&["C", "B"])]);
    let b = CutSetFamily::new(vec![cut(&["A"]), cut(&["B", "C"])]);
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
    assert_eq!(a.as_slice()[0], cut(&["A"]));
    assert_eq!(a.min_order(), Some(1));
}

#[test]
fn minimality_detects_supersets() {
    assert!(CutSetFamily::new(vec![cut(&["A", "B"]), cut(&["C", "D"])]).is_minimal());
    assert!(!CutSetFamily::new(vec![cut(&["A"]), cut(&["A", "B"])]).is_minimal());
}

#[test]
fn blocking_checks_every_path() {
    let source = ComponentId::source();
    let sink = ComponentId::sink();
    let paths = vec![
        Path::from_ids(["source", "A", "C", "sink"]),
        Path::from_ids(["source", "B", "C", "sink"]),
    ];
    let good = CutSetFamily::new(vec![cut(&["C"]), cut(&["A", "B"])]);
    assert!(good.blocks_every_path(&paths, &source, &sink));

    let bad = CutSetFamily::new(vec![cut(&["A"])]);
    assert!(!bad.blocks_every_path(&paths, &source, &sink));
}

#[test]
fn cut_set_display_is_sorted() {
    assert_eq!(cut(&["B", "A"]).to_string(), "{A, B}");
}

#[test]
fn family_serializes_as_nested_lists() {
    let family = CutSetFamily::new(vec![cut(&["B"]), cut(&["A", "C"])]);
    let json = serde_json::to_string(&family).unwrap();
    assert_eq!(json, r#"[["B"],["A","C"]]"#);
    let back: CutSetFamily = serde_json::from_str(r#"[["C","A"],["B"]]"#).unwrap();
    assert_eq!(back, family);
}

// ---- Paths ----

#[test]
fn path_strips_terminals() {
    let source = ComponentId::source();
    let sink = ComponentId::sink();
    let path = Path::from_ids(["source", "A", "B", "sink"]);
    let comps: Vec<&str> = path.components(&source, &sink).map(ComponentId::as_str).collect();
    assert_eq!(comps, vec!["A", "B"]);
    assert!(!path.is_direct(&source, &sink));
    assert!(Path::from_ids(["source", "sink"]).is_direct(&source, &sink));
}

// ---- Probability tables ----

#[test]
fn probability_table_rejects_out_of_range() {
    let mut table = ProbabilityTable::new();
    assert!(table.insert("A", 0.2).is_ok());
    let err = table.insert("B", 1.5).unwrap_err();
    assert!(matches!(err, ProbabilityError::InvalidProbability { .. }));
    assert!(table.insert("C", f64::NAN).is_err());
}

#[test]
fn missing_probability_is_an_error_not_a_default() {
    let table = ProbabilityTable::from_pairs([("A", 0.1)]).unwrap();
    assert_eq!(table.probability("A").unwrap(), 0.1);
    match table.probability("Z") {
        Err(ProbabilityError::MissingProbability { component }) => assert_eq!(component, "Z"),
        other => panic!("expected MissingProbability, got {other:?}"),
    }
}

#[test]
fn probability_table_deserialization_validates() {
    let ok: ProbabilityTable = serde_json::from_str(r#"{"A": 0.5}"#).unwrap();
    assert_eq!(ok.get("A"), Some(0.5));
    assert!(serde_json::from_str::<ProbabilityTable>(r#"{"A": -0.1}"#).is_err());
}

// ---- Curves ----

#[test]
fn curve_accepts_degenerate_sizes() {
    assert!(ReliabilityCurve::new(vec![], vec![]).unwrap().is_empty());
    assert_eq!(ReliabilityCurve::new(vec![0.0], vec![1.0]).unwrap().len(), 1);
}

#[test]
fn curve_rejects_broken_invariants() {
    assert!(matches!(
        ReliabilityCurve::new(vec![0.0, 1.0], vec![1.0]),
        Err(CurveError::LengthMismatch { .. })
    ));
    assert!(matches!(
        ReliabilityCurve::new(vec![-1.0, 1.0], vec![1.0, 0.5]),
        Err(CurveError::NegativeTime { index: 0, .. })
    ));
    assert!(matches!(
        ReliabilityCurve::new(vec![0.0, 0.0], vec![1.0, 0.5]),
        Err(CurveError::NonIncreasingTime { index: 1 })
    ));
    assert!(matches!(
        ReliabilityCurve::new(vec![0.0, 1.0], vec![0.5, 0.6]),
        Err(CurveError::IncreasingReliability { index: 1 })
    ));
    assert!(matches!(
        ReliabilityCurve::new(vec![0.0], vec![1.2]),
        Err(CurveError::ReliabilityOutOfRange { index: 0, .. })
    ));
}

#[test]
fn curve_deserialization_validates() {
    let ok: ReliabilityCurve =
        serde_json::from_str(r#"{"time": [0.0, 5.0], "reliability": [1.0, 0.4]}"#).unwrap();
    assert_eq!(ok.last(), Some((5.0, 0.4)));
    assert!(
        serde_json::from_str::<ReliabilityCurve>(
            r#"{"time": [5.0, 0.0], "reliability": [1.0, 0.4]}"#,
        )
            .is_err()
    );
}

// ---- Distributions ----

#[test]
fn exponential_cdf_and_hazard() {
    let d = FailureDistribution::exponential(0.1).unwrap();
    assert_eq!(d.probability_of_failure(0.0), 0.0);
    assert!((d.probability_of_failure(10.0) - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
    assert_eq!(d.hazard_rate(123.0), 0.1);
    assert!((d.reliability(10.0) - (-1.0f64).exp()).abs() < 1e-12);
}

#[test]
fn weibull_with_unit_shape_matches_exponential() {
    let w = FailureDistribution::weibull(1.0, 50.0).unwrap();
    let e = FailureDistribution::exponential(1.0 / 50.0).unwrap();
    for t in [1.0, 10.0, 100.0] {
        assert!((w.probability_of_failure(t) - e.probability_of_failure(t)).abs() < 1e-12);
        assert!((w.hazard_rate(t) - e.hazard_rate(t)).abs() < 1e-12);
    }
}

#[test]
fn log_normal_median_is_half() {
    let d = FailureDistribution::log_normal(2.0, 0.5).unwrap();
    let median = 2.0f64.exp();
    assert!((d.probability_of_failure(median) - 0.5).abs() < 1e-9);
    assert_eq!(d.probability_of_failure(-1.0), 0.0);
    assert_eq!(d.hazard_rate(0.0), 0.0);
    assert!(d.hazard_rate(median) > 0.0);
}

#[test]
fn distributions_reject_invalid_parameters() {
    assert!(FailureDistribution::exponential(0.0).is_err());
    assert!(FailureDistribution::weibull(-1.0, 2.0).is_err());
    assert!(FailureDistribution::log_normal(0.0, 0.0).is_err());
}

#[test]
fn distribution_serializes_with_type_tag() {
    let d = FailureDistribution::weibull(2.0, 100.0).unwrap();
    let json = serde_json::to_value(d).unwrap();
    assert_eq!(json["type"], "weibull");
    let back: FailureDistribution = serde_json::from_value(json).unwrap();
    assert_eq!(back, d);
}
