//! Criterion benchmarks for the Shabda index.
//!
//! Covers the normalization pipeline, trie insertion, exact lookup and
//! prefix enumeration, and sequential against parallel batch indexing.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shabda::analysis::Normalizer;
use shabda::config::IndexConfig;
use shabda::index::{IndexEngine, Trie};
use std::hint::black_box;

const WORDS: [&str; 16] = [
    "राम", "रामायण", "सीता", "गीता", "कथा", "कविता", "भारत", "भाषा", "नदी", "नगर", "पानी",
    "पुस्तक", "विद्या", "विद्यालय", "हिन्दी", "संस्कृत",
];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<(String, String)> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % WORDS.len();
            doc_words.push(WORDS[word_idx]);
        }

        documents.push((format!("doc{i}.txt"), doc_words.join(" ")));
    }

    documents
}

fn build_trie(documents: &[(String, String)], normalizer: &Normalizer) -> Trie {
    let mut trie = Trie::new();
    for (doc_id, text) in documents {
        for (position, word) in normalizer.normalize(text).iter().enumerate() {
            trie.insert(word, doc_id.as_str(), position);
        }
    }
    trie
}

/// Benchmark the normalization pipeline.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = Normalizer::devanagari().unwrap();
    let documents = generate_test_documents(100);

    group.bench_function("normalize_single_document", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&documents[0].1))))
    });

    group.bench_function("normalize_mixed_script", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box("Rama123 राम, सीता! 2024 गीता"))))
    });

    group.finish();
}

/// Benchmark trie construction and queries.
fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");

    let normalizer = Normalizer::devanagari().unwrap();
    let documents = generate_test_documents(200);

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("insert_200_documents", |b| {
        b.iter(|| black_box(build_trie(black_box(&documents), &normalizer)))
    });

    let trie = build_trie(&documents, &normalizer);

    group.throughput(Throughput::Elements(1));
    group.bench_function("search_hit", |b| {
        b.iter(|| black_box(trie.search(black_box("विद्यालय")).len()))
    });

    group.bench_function("search_miss", |b| {
        b.iter(|| black_box(trie.search(black_box("महाभारत")).len()))
    });

    group.bench_function("prefix_search_narrow", |b| {
        b.iter(|| black_box(trie.prefix_search(black_box("रामा")).len()))
    });

    group.bench_function("prefix_search_all", |b| {
        b.iter(|| black_box(trie.prefix_search(black_box("")).len()))
    });

    group.finish();
}

/// Benchmark whole-batch indexing through the engine.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");
    group.sample_size(20);

    let documents = generate_test_documents(500);
    let config = IndexConfig::default();

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("sequential_index_document", |b| {
        b.iter_with_setup(
            || IndexEngine::new(&config).unwrap(),
            |mut engine| {
                for (doc_id, text) in &documents {
                    engine.index_document(doc_id, text);
                }
                black_box(engine.stats())
            },
        )
    });

    group.bench_function("parallel_index_documents", |b| {
        b.iter_with_setup(
            || (IndexEngine::new(&config).unwrap(), documents.clone()),
            |(mut engine, batch)| {
                engine.index_documents(batch);
                black_box(engine.stats())
            },
        )
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_trie, bench_indexing);
criterion_main!(benches);
