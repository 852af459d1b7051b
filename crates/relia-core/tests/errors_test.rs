use relia_core::errors::*;

#[test]
fn missing_probability_carries_component_id() {
    let err = ProbabilityError::MissingProbability {
        component: "pump-2".into(),
    };
    assert!(err.to_string().contains("pump-2"));
    assert_eq!(err.error_code(), "MISSING_PROBABILITY");
}

#[test]
fn candidate_limit_carries_values() {
    let err = CutSetError::CandidateLimitExceeded {
        limit: 100,
        attempted: 250,
    };
    let msg = err.to_string();
    assert!(msg.contains("100"));
    assert!(msg.contains("250"));
    assert_eq!(err.error_code(), "COMBINATORIAL_LIMIT");
}

#[test]
fn event_limit_shares_combinatorial_code() {
    let err = ProbabilityError::EventLimitExceeded { limit: 20, events: 31 };
    assert_eq!(err.error_code(), "COMBINATORIAL_LIMIT");
}

#[test]
fn relia_error_wraps_subsystems_and_keeps_codes() {
    let err: ReliaError = GraphError::UnknownNode { id: "X".into() }.into();
    assert!(matches!(err, ReliaError::Graph(_)));
    assert_eq!(err.error_code(), "UNKNOWN_NODE");

    let err: ReliaError = CurveError::NonIncreasingTime { index: 3 }.into();
    assert_eq!(err.error_code(), "MALFORMED_CURVE");
}

#[test]
fn coded_string_prefixes_code() {
    let err = ConfigError::ValidationFailed {
        field: "cutset.max_paths".into(),
        message: "must be greater than 0".into(),
    };
    let s = err.coded_string();
    assert!(s.starts_with("[CONFIG_ERROR]"));
    assert!(s.contains("cutset.max_paths"));
}
