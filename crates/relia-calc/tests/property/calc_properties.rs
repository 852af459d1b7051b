//! Property tests for relia-calc.

use std::collections::BTreeMap;

use proptest::prelude::*;

use relia_calc::{inclusion_exclusion, Expr, UnreliabilityCalculator};
use relia_core::models::{CutSet, CutSetFamily, ProbabilityTable};

fn probabilities(max: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0_f64..=1.0_f64, 0..=max)
}

/// Random cut-set families over components c0..c5 with random probabilities.
fn family_and_table() -> impl Strategy<Value = (CutSetFamily, ProbabilityTable)> {
    (
        prop::collection::vec(prop::collection::btree_set(0usize..6, 1..=3), 1..=5),
        prop::collection::vec(0.0_f64..=1.0_f64, 6),
    )
        .prop_map(|(sets, probs)| {
            let family: CutSetFamily = sets
                .into_iter()
                .map(|s| s.into_iter().map(|i| format!("c{i}")).collect::<CutSet>())
                .collect();
            let table = ProbabilityTable::from_pairs(
                probs.into_iter().enumerate().map(|(i, p)| (format!("c{i}"), p)),
            )
            .unwrap();
            (family, table)
        })
}

proptest! {
    #[test]
    fn union_matches_complement_product(p in probabilities(8)) {
        let union = inclusion_exclusion(&p, 20).unwrap();
        let complement = 1.0 - p.iter().map(|x| 1.0 - x).product::<f64>();
        prop_assert!((union - complement).abs() < 1e-9, "{} vs {}", union, complement);
    }

    #[test]
    fn union_is_a_probability(p in probabilities(8)) {
        let union = inclusion_exclusion(&p, 20).unwrap();
        prop_assert!((-1e-9..=1.0 + 1e-9).contains(&union));
    }

    #[test]
    fn symbolic_union_evaluates_to_numeric(p in probabilities(6)) {
        let symbols: Vec<Expr> = (0..p.len()).map(|i| Expr::symbol(format!("x{i}"))).collect();
        let expr = inclusion_exclusion(&symbols, 20).unwrap();
        let bindings: BTreeMap<String, f64> =
            p.iter().enumerate().map(|(i, &v)| (format!("x{i}"), v)).collect();
        let numeric = inclusion_exclusion(&p, 20).unwrap();
        prop_assert!((expr.eval(&bindings).unwrap() - numeric).abs() < 1e-9);
    }

    #[test]
    fn shared_component_formula_is_a_probability((family, table) in family_and_table()) {
        let calc = UnreliabilityCalculator::new();
        let exact = calc.exact_system_unreliability(&family, &table).unwrap();
        prop_assert!((-1e-9..=1.0 + 1e-9).contains(&exact));
        // The union is at least as likely as its most likely member.
        let largest = family
            .iter()
            .map(|c| calc.cut_probability(c, &table).unwrap())
            .fold(0.0, f64::max);
        prop_assert!(exact + 1e-9 >= largest);
    }

    #[test]
    fn symbolic_system_matches_numeric((family, table) in family_and_table()) {
        let calc = UnreliabilityCalculator::new();
        let expr = calc.symbolic_system_unreliability(&family).unwrap();
        let symbolic = calc.evaluate(&expr, &table).unwrap();
        let numeric = calc.system_unreliability(&family, &table).unwrap();
        prop_assert!((symbolic - numeric).abs() < 1e-9);
    }
}
