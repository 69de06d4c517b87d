//! Performance benchmarks for suffix tree construction and queries
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sufx::build_suffix_tree;

/// Deterministic pseudo-random text over a small alphabet
fn random_text(len: usize, alphabet: u8) -> Vec<u8> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b'a' + (state % alphabet as u64) as u8
        })
        .collect()
}

/// Source-like text with long repeated runs
fn repetitive_text(len: usize) -> Vec<u8> {
    let unit = b"fn main() { println!(\"hello\"); }\n";
    unit.iter().copied().cycle().take(len).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Bytes(size as u64));

        let random = random_text(size, 4);
        group.bench_with_input(BenchmarkId::new("random_dna", size), &random, |b, text| {
            b.iter(|| build_suffix_tree(black_box(text.as_slice())).unwrap())
        });

        let repetitive = repetitive_text(size);
        group.bench_with_input(
            BenchmarkId::new("repetitive", size),
            &repetitive,
            |b, text| b.iter(|| build_suffix_tree(black_box(text.as_slice())).unwrap()),
        );
    }

    let uniform = vec![b'a'; 50_000];
    group.bench_function("single_symbol_50k", |b| {
        b.iter(|| build_suffix_tree(black_box(uniform.as_slice())).unwrap())
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let text = random_text(200_000, 26);
    let tree = build_suffix_tree(&text).unwrap();
    let present = &text[50_000..50_032];
    let absent = b"zzzzzzzzzzzzzzzzzzzzzzzz";

    let mut group = c.benchmark_group("queries");

    group.bench_function("contains_present_32", |b| {
        b.iter(|| tree.contains(black_box(present)))
    });

    group.bench_function("contains_absent", |b| {
        b.iter(|| tree.contains(black_box(&absent[..])))
    });

    group.bench_function("occurrences_short", |b| {
        b.iter(|| tree.occurrences(black_box(b"ab")))
    });

    group.bench_function("enumerate_suffixes_10k", |b| {
        let small = random_text(10_000, 4);
        let small_tree = build_suffix_tree(&small).unwrap();
        b.iter(|| small_tree.enumerate_suffixes().count())
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
