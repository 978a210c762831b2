//! Criterion benchmarks for spine-merge and ledger verification.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use spine_core::models::TruthStatus;
use spine_ledger::Ledger;
use spine_merge::MergeEngine;
use test_fixtures::draft;

fn build(n: usize, vantage: &str, dispute_every: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for i in 0..n {
        let status = if i % dispute_every == 0 {
            TruthStatus::Canonical
        } else {
            TruthStatus::Verified
        };
        ledger
            .append_draft(draft(i, status, vantage))
            .unwrap_or_else(|e| panic!("bench append failed: {e}"));
    }
    ledger
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for n in [100usize, 1_000, 5_000] {
        let a = build(n, "a", usize::MAX);
        let b = build(n, "b", 10);
        let engine = MergeEngine::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| engine.merge(&a, &b))
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let ledger = build(5_000, "a", 7);
    c.bench_function("verify_5000", |b| b.iter(|| ledger.verify()));
}

criterion_group!(benches, bench_merge, bench_verify);
criterion_main!(benches);
