//! Property tests for relia-core models: curve validation and probability bounds.

use proptest::prelude::*;

use relia_core::errors::{CurveError, ProbabilityError};
use relia_core::models::{ProbabilityTable, ReliabilityCurve};

/// Strictly increasing times paired with non-increasing reliabilities in [0, 1].
fn monotone_samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.01_f64..10.0, 0.0_f64..=1.0), 0..30).prop_map(|steps| {
        let mut t = 0.0;
        let mut r = 1.0;
        let mut time = Vec::with_capacity(steps.len());
        let mut reliability = Vec::with_capacity(steps.len());
        for (dt, factor) in steps {
            time.push(t);
            reliability.push(r);
            t += dt;
            r *= factor;
        }
        (time, reliability)
    })
}

proptest! {
    #[test]
    fn monotone_curves_are_accepted((time, reliability) in monotone_samples()) {
        let curve = ReliabilityCurve::new(time.clone(), reliability.clone());
        prop_assert!(curve.is_ok());
        let curve = curve.unwrap();
        prop_assert_eq!(curve.times(), time.as_slice());
        prop_assert_eq!(curve.reliabilities(), reliability.as_slice());
    }
}

proptest! {
    #[test]
    fn rising_reliability_is_rejected(
        (time, mut reliability) in monotone_samples(),
        pick in any::<prop::sample::Index>(),
        bump in 0.001_f64..1.0,
    ) {
        prop_assume!(time.len() >= 2);
        let i = 1 + pick.index(time.len() - 1);
        let raised = (reliability[i - 1] + bump).min(1.0);
        prop_assume!(raised > reliability[i - 1]);
        reliability[i] = raised;
        let err = ReliabilityCurve::new(time, reliability).unwrap_err();
        prop_assert!(matches!(err, CurveError::IncreasingReliability { index } if index == i), "expected IncreasingReliability at index {}", i);
    }
}

proptest! {
    #[test]
    fn repeated_time_is_rejected(
        (mut time, reliability) in monotone_samples(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(time.len() >= 2);
        let i = 1 + pick.index(time.len() - 1);
        time[i] = time[i - 1];
        let err = ReliabilityCurve::new(time, reliability).unwrap_err();
        prop_assert!(matches!(err, CurveError::NonIncreasingTime { index } if index == i), "expected NonIncreasingTime at index {}", i);
    }
}

proptest! {
    #[test]
    fn table_accepts_exactly_unit_interval(p in -2.0_f64..3.0) {
        let mut table = ProbabilityTable::new();
        let result = table.insert("A", p);
        if (0.0..=1.0).contains(&p) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(table.get("A"), Some(p));
        } else {
            let rejected = matches!(
                result,
                Err(ProbabilityError::InvalidProbability { ref component, value })
                    if component == "A" && value == p
            );
            prop_assert!(rejected);
            prop_assert!(table.is_empty());
        }
    }
}
