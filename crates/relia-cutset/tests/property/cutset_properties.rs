//! Property tests for relia-cutset over random source-sink DAGs.

use proptest::prelude::*;

use relia_core::models::{CutSet, CutSetFamily, Path};
use relia_core::traits::{ICutSetStrategy, IPathSource};
use relia_cutset::{minimal_family, BddStrategy, MocusStrategy};
use relia_graph::{Component, SystemGraph};

/// Random DAG over `n` components: forward edges between components, plus
/// optional links from the source and to the sink. No direct source-sink edge.
fn build_random_dag(
    n: usize,
    forward: &[bool],
    from_source: &[bool],
    to_sink: &[bool],
) -> SystemGraph {
    let mut graph = SystemGraph::new();
    for i in 0..n {
        graph.add_component(Component::new(format!("c{i}"))).unwrap();
    }
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if forward[k] {
                graph.add_connection(&format!("c{i}"), &format!("c{j}")).unwrap();
            }
            k += 1;
        }
        if from_source[i] {
            graph.add_connection("source", &format!("c{i}")).unwrap();
        }
        if to_sink[i] {
            graph.add_connection(&format!("c{i}"), "sink").unwrap();
        }
    }
    graph
}

fn dag_strategy() -> impl Strategy<Value = SystemGraph> {
    (1usize..=7)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(any::<bool>(), n * (n - 1) / 2),
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            )
        })
        .prop_map(|(n, forward, from_source, to_sink)| {
            build_random_dag(n, &forward, &from_source, &to_sink)
        })
}

fn blocks_all(cut: &CutSet, graph: &SystemGraph, paths: &[Path]) -> bool {
    paths.iter().all(|p| cut.blocks(p, graph.source(), graph.sink()))
}

/// Minimal cut sets by exhaustive subset enumeration.
fn brute_force(graph: &SystemGraph) -> CutSetFamily {
    let paths = graph.paths();
    if paths.is_empty() {
        return CutSetFamily::empty();
    }
    let ids: Vec<String> = graph.components().map(|c| c.id.to_string()).collect();
    let cuts = (0u32..(1u32 << ids.len()))
        .map(|mask| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u32 << i) != 0)
                .map(|(_, id)| id.as_str())
                .collect::<CutSet>()
        })
        .filter(|cut| blocks_all(cut, graph, &paths));
    minimal_family(cuts)
}

proptest! {
    #[test]
    fn mocus_and_bdd_agree(graph in dag_strategy()) {
        let mocus = MocusStrategy::new().find_minimal_cut_sets(&graph).unwrap();
        let bdd = BddStrategy::new().find_minimal_cut_sets(&graph).unwrap();
        prop_assert_eq!(mocus, bdd);
    }

    #[test]
    fn every_cut_set_blocks_every_path(graph in dag_strategy()) {
        let paths = graph.paths();
        let cuts = MocusStrategy::new().find_minimal_cut_sets(&graph).unwrap();
        for cut in &cuts {
            prop_assert!(blocks_all(cut, &graph, &paths), "{} misses a path", cut);
        }
    }

    #[test]
    fn no_cut_set_contains_another(graph in dag_strategy()) {
        let cuts = BddStrategy::new().find_minimal_cut_sets(&graph).unwrap();
        prop_assert!(cuts.is_minimal());
    }

    #[test]
    fn dropping_any_member_reconnects(graph in dag_strategy()) {
        let paths = graph.paths();
        let cuts = MocusStrategy::new().find_minimal_cut_sets(&graph).unwrap();
        for cut in &cuts {
            for member in cut.iter() {
                let reduced: CutSet = cut.iter().filter(|id| *id != member).cloned().collect();
                prop_assert!(!blocks_all(&reduced, &graph, &paths));
            }
        }
    }

    #[test]
    fn matches_exhaustive_enumeration(graph in dag_strategy()) {
        let cuts = MocusStrategy::new().find_minimal_cut_sets(&graph).unwrap();
        prop_assert_eq!(cuts, brute_force(&graph));
    }
}
