use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use relia_calc::{Expr, UnreliabilityCalculator};
use relia_core::models::{CutSet, CutSetFamily, ProbabilityTable};

fn bench_union_scaling(c: &mut Criterion) {
    let calc = UnreliabilityCalculator::new();
    let mut group = c.benchmark_group("inclusion_exclusion");
    for n in [8usize, 12, 16] {
        let p: Vec<f64> = (0..n).map(|i| 0.01 + i as f64 * 0.001).collect();
        group.bench_with_input(BenchmarkId::new("numeric", n), &p, |b, p| {
            b.iter(|| calc.union_probability(p).unwrap())
        });
    }
    for n in [4usize, 6, 8] {
        let symbols: Vec<Expr> = (0..n).map(|i| Expr::symbol(format!("F_{i}"))).collect();
        group.bench_with_input(BenchmarkId::new("symbolic", n), &symbols, |b, s| {
            b.iter(|| calc.symbolic_union_probability(s).unwrap())
        });
    }
    group.finish();
}

fn bench_shared_components(c: &mut Criterion) {
    let calc = UnreliabilityCalculator::new();
    // Overlapping pairs {c_i, c_{i+1}}.
    let family: CutSetFamily = (0..12)
        .map(|i| CutSet::from_iter([format!("c{i}"), format!("c{}", i + 1)]))
        .collect();
    let table =
        ProbabilityTable::from_pairs((0..13).map(|i| (format!("c{i}"), 0.05))).unwrap();

    c.bench_function("exact_unreliability_12_overlapping_cuts", |b| {
        b.iter(|| calc.exact_system_unreliability(&family, &table).unwrap())
    });
}

criterion_group!(benches, bench_union_scaling, bench_shared_components);
criterion_main!(benches);
