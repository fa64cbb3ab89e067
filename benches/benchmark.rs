//! Benchmarks for textrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textrank::*;

/// Build a synthetic corpus: `n` sentences over a rotating vocabulary so
/// the graph has realistic density.
fn synthetic_corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "topic{} shares words with topic{} and topic{} in sentence {}",
                i % 13,
                (i + 1) % 13,
                (i + 5) % 13,
                i
            )
        })
        .collect()
}

fn benchmark_keyword_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("keywords");
    for size in [16usize, 64, 256] {
        let corpus = synthetic_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut summarizer = KeywordSummarizer::new().with_config(
                    KeywordConfig::default()
                        .with_min_count(1)
                        .with_min_cooccurrence(1),
                );
                summarizer.summarize(black_box(corpus), 20).unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_keysentence_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("keysentences");
    for size in [16usize, 64, 256] {
        let corpus = synthetic_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut summarizer = KeysentenceSummarizer::new().with_config(
                    SentenceConfig::default()
                        .with_min_count(1)
                        .with_min_sim(0.2),
                );
                summarizer.summarize(black_box(corpus), 5).unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_solver(c: &mut Criterion) {
    // A ring graph with chords, solver cost isolated from tokenization.
    let mut edges = rustc_hash::FxHashMap::default();
    let n: u32 = 1000;
    for i in 0..n {
        edges.insert((i.min((i + 1) % n), i.max((i + 1) % n)), 1.0);
        edges.insert((i.min((i + 97) % n), i.max((i + 97) % n)), 0.5);
    }
    let graph = CsrGraph::from_edges(n as usize, &edges);

    c.bench_function("pagerank_1000_nodes", |b| {
        b.iter(|| PageRank::new().run(black_box(&graph)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_keyword_extraction,
    benchmark_keysentence_extraction,
    benchmark_solver
);
criterion_main!(benches);
