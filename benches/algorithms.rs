//! Benchmarks for algorithm lookup and the FST equality check

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fst_bench::{check_fst_equals, AlgorithmRegistry};
use rustfst::fst_impls::VectorFst;
use rustfst::fst_traits::{MutableFst, SerializableFst};
use rustfst::semirings::{Semiring, TropicalWeight};
use rustfst::Tr;
use tempfile::TempDir;

fn chain_fst(len: u32) -> VectorFst<TropicalWeight> {
    let mut fst = VectorFst::<TropicalWeight>::new();
    let mut prev = fst.add_state();
    fst.set_start(prev).unwrap();
    for label in 1..=len {
        let next = fst.add_state();
        fst.add_tr(prev, Tr::new(label, label, TropicalWeight::new(0.5), next))
            .unwrap();
        prev = next;
    }
    fst.set_final(prev, TropicalWeight::one()).unwrap();
    fst
}

fn benchmark_registry(c: &mut Criterion) {
    let registry = AlgorithmRegistry::global();
    c.bench_function("registry_lookup", |b| {
        b.iter(|| {
            let algo = registry.get(black_box("rmfinalepsilon")).unwrap();
            black_box(algo.openfst_bench_cli());
        });
    });
}

fn benchmark_oracle(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path_a = dir.path().join("a.fst");
    let path_b = dir.path().join("b.fst");
    chain_fst(1_000).write(&path_a).unwrap();
    chain_fst(1_000).write(&path_b).unwrap();

    c.bench_function("check_fst_equals_1k_states", |b| {
        b.iter(|| check_fst_equals(black_box(&path_a), black_box(&path_b)).unwrap());
    });
}

criterion_group!(benches, benchmark_registry, benchmark_oracle);
criterion_main!(benches);
