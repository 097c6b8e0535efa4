use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use doc_similarity::{DocumentSet, Metric, MetricSet, PairwiseComparator, SimilarityConfig};

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "document", "similarity",
    "engine", "metric", "pair", "score", "token", "vector", "corpus", "signature", "shingle", "gram",
];

/// 疑似ランダムな文書を生成 (xorshift)
fn synthetic_texts(docs: usize, words: usize) -> Vec<String> {
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    (0..docs)
        .map(|_| {
            (0..words)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    WORDS[(state % WORDS.len() as u64) as usize]
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn metric_benchmark(c: &mut Criterion) {
    let texts = synthetic_texts(2, 2_000);
    let metrics = MetricSet::default();
    let mut group = c.benchmark_group("metric");
    for metric in Metric::ALL {
        group.bench_function(metric.column_name(), |b| {
            b.iter(|| metrics.score(metric, &texts[0], &texts[1]))
        });
    }
    group.finish();
}

fn pairwise_benchmark(c: &mut Criterion) {
    let texts = synthetic_texts(16, 500);
    let documents = DocumentSet::from_texts(&texts);
    let mut group = c.benchmark_group("pairwise");
    for workers in [1, 4] {
        let comparator = PairwiseComparator::new(&SimilarityConfig::default().with_workers(workers))
            .expect("comparator");
        group.bench_with_input(BenchmarkId::from_parameter(workers), &documents, |b, docs| {
            b.iter(|| comparator.compare(docs).expect("compare"))
        });
    }
    group.finish();
}

criterion_group!(benches, metric_benchmark, pairwise_benchmark);
criterion_main!(benches);
